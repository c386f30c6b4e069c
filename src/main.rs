//! Native REPL driver. Runs the same interpreter against stdin so the whole
//! command surface can be exercised without a browser; staged sequences use
//! blocking sleeps and drafts go through an offline transport.

use colored::Colorize;
use portfolio_cli::interpreter::{Interpreter, Signal};
use portfolio_cli::output::OutputBlock;
use portfolio_cli::session::{EmailDraft, EntryId, Session};
use portfolio_cli::staged::{self, StagedKind};
use portfolio_cli::transport::{Transport, TransportError};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// There is no delivery endpoint outside the browser, so finalized drafts
/// always come back rejected with a readable reason.
struct OfflineTransport;

impl Transport for OfflineTransport {
    fn send(&self, _draft: &EmailDraft) -> Result<(), TransportError> {
        Err(TransportError::Rejected(
            "No delivery endpoint in local mode.".to_string(),
        ))
    }
}

fn render_block(block: &OutputBlock) {
    match block {
        OutputBlock::Text { content } => println!("{}", content),
        OutputBlock::Link { href, label } => {
            println!("{}  {}", label.cyan(), href.underline())
        }
        OutputBlock::Error { content } => println!("{}", content.red()),
        OutputBlock::Success { content } => println!("{}", content.green()),
        OutputBlock::Image { src } => println!("[image] {}", src),
        OutputBlock::Skills { entries } => {
            for entry in entries {
                println!("  {:<6} {}", entry.name.yellow(), entry.icon);
            }
        }
        OutputBlock::Profile => {
            println!("{}", "Guru Krishnaa".bold());
            println!("{}", "Backend & systems · SRMIST".dimmed());
        }
    }
}

fn render_entry(session: &Session, id: EntryId) {
    if let Some(entry) = session.transcript().iter().find(|e| e.id == id) {
        for block in &entry.output {
            render_block(block);
        }
    }
}

fn run_staged(interpreter: &Interpreter, session: &mut Session, entry: EntryId, kind: StagedKind) {
    for (i, delay) in staged::delays(kind).iter().enumerate() {
        thread::sleep(Duration::from_millis(u64::from(*delay)));
        let signals = interpreter.advance_stage(session, entry, kind, i + 1);
        render_entry(session, entry);
        for signal in signals {
            if let Signal::CrashAndRecover { delay_ms } = signal {
                thread::sleep(Duration::from_millis(u64::from(delay_ms)));
                println!("{}", "System recovered.".green());
            }
        }
    }
}

fn main() -> io::Result<()> {
    let interpreter = Interpreter::new();
    let mut session = Session::new();
    let transport = OfflineTransport;
    let stdin = io::stdin();

    println!(
        "{}",
        "PortOS v1.0 (Beta) — type 'help' to begin, 'exit' to quit".dimmed()
    );

    loop {
        print!("{} {} ", session.path_string().green(), session.prompt().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == "exit" && session.dialogue_step() == 0 {
            break;
        }

        let submission = interpreter.submit(&mut session, line);
        for id in &submission.entries {
            render_entry(&session, *id);
        }

        let mut halt = false;
        for signal in submission.signals {
            match signal {
                Signal::OpenUrl { href } => println!("{} {}", "open:".cyan(), href.underline()),
                Signal::ClearTranscript => print!("\x1b[2J\x1b[H"),
                Signal::CloseWindow => halt = true,
                Signal::LaunchGame => {
                    println!("{}", "snake is a browser exclusive. Imagine it here.".dimmed())
                }
                Signal::SwitchTheme { name } => {
                    println!("{} {}", "theme:".cyan(), name)
                }
                Signal::SendDraft { draft } => {
                    let outcome = transport.send(&draft);
                    let id = interpreter.resolve_transport(&mut session, outcome);
                    render_entry(&session, id);
                }
                Signal::Staged { entry, kind } => {
                    run_staged(&interpreter, &mut session, entry, kind)
                }
                Signal::CrashAndRecover { .. } => {}
            }
        }
        if halt {
            break;
        }
    }
    Ok(())
}
