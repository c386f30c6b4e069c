use crate::command::CommandRegistry;
use crate::content::{self, FILE_SYSTEM};
use crate::error::ShellError;
use crate::output::OutputBlock;
use crate::session::{DialogueStep, EmailDialogue, EmailDraft, EntryId, InteractionMode, Session};
use crate::staged::{self, StagedKind};
use crate::theme;
use crate::transport::TransportError;
use crate::vfs::{resolve_directory, ROOT};
use log::debug;
use serde::Serialize;

/// Declarative intents for the presentation layer. The core never calls the
/// UI; it only says what should happen next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    OpenUrl { href: String },
    ClearTranscript,
    CloseWindow,
    CrashAndRecover { delay_ms: u32 },
    LaunchGame,
    SwitchTheme { name: String },
    /// Finalized draft ready for the transport collaborator.
    SendDraft { draft: EmailDraft },
    /// A staged sequence started; the driver owns the delays and calls
    /// `advance_stage` for each later stage.
    Staged { entry: EntryId, kind: StagedKind },
}

/// What one submitted line produced: the transcript entries appended and the
/// side effects requested.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Submission {
    pub entries: Vec<EntryId>,
    pub signals: Vec<Signal>,
}

pub struct Interpreter {
    registry: CommandRegistry,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::default_commands(),
        }
    }

    /// Advance the session by one submitted line. Not reentrant; all state
    /// transitions happen before this returns.
    pub fn submit(&self, session: &mut Session, raw: &str) -> Submission {
        if let InteractionMode::EmailCapture(dialogue) = &session.mode {
            let dialogue = dialogue.clone();
            return self.capture_field(session, dialogue, raw);
        }
        self.run_command(session, raw)
    }

    /// Abort the email dialogue, discarding the partial draft. No-op in
    /// command mode. Does not cancel a transport call already dispatched.
    pub fn cancel_dialogue(&self, session: &mut Session) -> Option<EntryId> {
        if !matches!(session.mode, InteractionMode::EmailCapture(_)) {
            return None;
        }
        session.mode = InteractionMode::Command;
        Some(session.append_entry("", vec![OutputBlock::error("Transformation aborted.")], ""))
    }

    /// Report the transport collaborator's outcome back into the transcript.
    pub fn resolve_transport(
        &self,
        session: &mut Session,
        outcome: Result<(), TransportError>,
    ) -> EntryId {
        let output = match outcome {
            Ok(()) => vec![
                OutputBlock::success(format!(
                    "Message queued for deliver to {}",
                    content::CONTACT_EMAIL
                )),
                OutputBlock::text("Transmission complete."),
            ],
            Err(err) => {
                debug!("transport failed: {}", err);
                vec![
                    OutputBlock::from_err(ShellError::Transport(err.to_string())),
                    OutputBlock::text("Please try sending manually."),
                ]
            }
        };
        session.append_entry("", output, "")
    }

    /// Apply one later stage of a staged sequence. Only the entry the
    /// sequence created is touched; if it is gone (e.g. the transcript was
    /// cleared) the stage is dropped on the floor.
    pub fn advance_stage(
        &self,
        session: &mut Session,
        entry: EntryId,
        kind: StagedKind,
        stage: usize,
    ) -> Vec<Signal> {
        let mut signals = Vec::new();
        let Some(output) = staged::stage_output(kind, stage) else {
            return signals;
        };
        match session.entry_mut(entry) {
            Some(e) => e.output = output,
            None => {
                debug!("staged update targeted missing entry {}", entry);
                return signals;
            }
        }
        if kind == StagedKind::Crash && stage == staged::final_stage(kind) {
            signals.push(Signal::CrashAndRecover {
                delay_ms: staged::CRASH_RECOVERY_MS,
            });
        }
        signals
    }

    // -- email capture --

    fn capture_field(
        &self,
        session: &mut Session,
        mut dialogue: EmailDialogue,
        raw: &str,
    ) -> Submission {
        let mut sub = Submission::default();
        // echo the raw value back first, untrimmed; blank is a valid answer
        sub.entries
            .push(session.append_entry("", vec![OutputBlock::text(raw)], ""));

        let next_prompt = match dialogue.step {
            DialogueStep::Name => {
                dialogue.draft.name = raw.to_string();
                dialogue.step = DialogueStep::Email;
                Some("Your Email:")
            }
            DialogueStep::Email => {
                dialogue.draft.email = raw.to_string();
                dialogue.step = DialogueStep::Subject;
                Some("Subject:")
            }
            DialogueStep::Subject => {
                dialogue.draft.subject = raw.to_string();
                dialogue.step = DialogueStep::Message;
                Some("Message:")
            }
            DialogueStep::Message => {
                dialogue.draft.message = raw.to_string();
                None
            }
        };

        match next_prompt {
            Some(prompt) => {
                sub.entries
                    .push(session.append_entry("", vec![OutputBlock::text(prompt)], ""));
                session.mode = InteractionMode::EmailCapture(dialogue);
            }
            None => {
                // draft finalized: hand off and drop back to command mode
                sub.entries.push(session.append_entry(
                    "",
                    vec![OutputBlock::text("Sending transmission...")],
                    "",
                ));
                sub.signals.push(Signal::SendDraft {
                    draft: dialogue.draft,
                });
                session.mode = InteractionMode::Command;
            }
        }
        sub
    }

    // -- command dispatch --

    fn run_command(&self, session: &mut Session, raw: &str) -> Submission {
        // blank input is a no-op submission in command mode
        if raw.trim().is_empty() {
            return Submission::default();
        }

        // a leading slash is an alias for direct command entry
        let cmd = raw.strip_prefix('/').unwrap_or(raw);
        let lower = cmd.trim().to_lowercase();
        session.push_history(raw);
        let path = session.path_string();
        debug!("dispatch {:?} at {}", lower, path);

        let mut sub = Submission::default();

        if lower == "clear" {
            session.clear_transcript();
            sub.signals.push(Signal::ClearTranscript);
        } else if lower == "test" {
            let output = staged::stage_output(StagedKind::Hack, 0).unwrap_or_default();
            let id = session.append_entry(raw, output, path);
            sub.entries.push(id);
            sub.signals.push(Signal::Staged {
                entry: id,
                kind: StagedKind::Hack,
            });
        } else if lower.starts_with("open") {
            let (output, signal) = self.run_open(&lower);
            sub.entries.push(session.append_entry(raw, output, path));
            sub.signals.extend(signal);
        } else if lower == "ls" {
            let output = self.run_ls(session);
            sub.entries.push(session.append_entry(raw, output, path));
        } else if lower == "cd" || lower.starts_with("cd ") {
            let target = lower.strip_prefix("cd").unwrap_or_default().trim().to_string();
            let output = self.run_cd(session, &target);
            sub.entries.push(session.append_entry(raw, output, path));
        } else if lower == "cat" || lower.starts_with("cat ") {
            let target = lower.strip_prefix("cat").unwrap_or_default().trim().to_string();
            let output = self.run_cat(session, &target);
            sub.entries.push(session.append_entry(raw, output, path));
        } else if lower == "rm -rf /" || lower == "rm -rf /*" {
            let output = staged::stage_output(StagedKind::Crash, 0).unwrap_or_default();
            let id = session.append_entry(raw, output, path);
            sub.entries.push(id);
            sub.signals.push(Signal::Staged {
                entry: id,
                kind: StagedKind::Crash,
            });
        } else if lower == "shutdown" {
            let output = vec![OutputBlock::text("System halting...")];
            sub.entries.push(session.append_entry(raw, output, path));
            sub.signals.push(Signal::CloseWindow);
        } else if lower == "contact" {
            let output = vec![
                OutputBlock::text("Initiating secure transmission protocol..."),
                OutputBlock::text("Press ESC to cancel at any time."),
                OutputBlock::text(" "),
                OutputBlock::text("Your Name:"),
            ];
            sub.entries.push(session.append_entry(raw, output, path));
            session.mode = InteractionMode::EmailCapture(EmailDialogue {
                step: DialogueStep::Name,
                draft: EmailDraft::default(),
            });
        } else if lower == "snake" {
            // handed straight to the game component, no transcript entry
            sub.signals.push(Signal::LaunchGame);
        } else if lower.starts_with("theme") {
            let (output, signal) = self.run_theme(&lower);
            sub.entries.push(session.append_entry(raw, output, path));
            sub.signals.extend(signal);
        } else {
            let output = self.run_registry(cmd.trim(), &lower);
            sub.entries.push(session.append_entry(raw, output, path));
        }
        sub
    }

    fn run_registry(&self, original: &str, lower: &str) -> Vec<OutputBlock> {
        let (name, arg) = match lower.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (lower, ""),
        };
        match self.registry.get(name) {
            Some(command) => command.execute(arg),
            None if lower.is_empty() => Vec::new(),
            None => vec![OutputBlock::from_err(ShellError::UnknownCommand(
                original.to_string(),
            ))],
        }
    }

    fn run_ls(&self, session: &Session) -> Vec<OutputBlock> {
        let children = match resolve_directory(&FILE_SYSTEM, &session.path)
            .and_then(|dir| dir.children())
        {
            Some(children) => children,
            None => return vec![OutputBlock::from_err(ShellError::UnresolvedPath)],
        };
        let mut entries: Vec<(bool, String)> = children
            .iter()
            .map(|(name, node)| (node.is_dir(), name.clone()))
            .collect();
        // directories first, then case-sensitive lexical order per group
        entries.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        entries
            .into_iter()
            .map(|(is_dir, name)| {
                OutputBlock::text(if is_dir { format!("{}/", name) } else { name })
            })
            .collect()
    }

    fn run_cd(&self, session: &mut Session, target: &str) -> Vec<OutputBlock> {
        if target.is_empty() || target == "~" {
            session.path = vec![ROOT.to_string()];
            return Vec::new();
        }
        if target == ".." {
            // at root this is a silent no-op
            if session.path.len() > 1 {
                session.path.pop();
            }
            return Vec::new();
        }
        let not_found = || {
            vec![OutputBlock::from_err(ShellError::NoSuchEntry {
                cmd: "cd",
                target: target.to_string(),
            })]
        };
        let Some(dir) = resolve_directory(&FILE_SYSTEM, &session.path) else {
            return not_found();
        };
        match dir.lookup_child(target) {
            Some((stored, node)) if node.is_dir() => {
                // push the stored-case name so the prompt echoes it faithfully
                session.path.push(stored.to_string());
                Vec::new()
            }
            Some(_) => vec![OutputBlock::from_err(ShellError::NotADirectory(
                target.to_string(),
            ))],
            None => not_found(),
        }
    }

    fn run_cat(&self, session: &Session, target: &str) -> Vec<OutputBlock> {
        if target.is_empty() {
            return vec![OutputBlock::from_err(ShellError::Usage("cat <filename>"))];
        }
        let not_found = || {
            vec![OutputBlock::from_err(ShellError::NoSuchEntry {
                cmd: "cat",
                target: target.to_string(),
            })]
        };
        let Some(dir) = resolve_directory(&FILE_SYSTEM, &session.path) else {
            return not_found();
        };
        match dir.lookup_child(target) {
            Some((_, crate::vfs::VfsNode::File { content })) => {
                vec![OutputBlock::text(content.clone())]
            }
            Some(_) => vec![OutputBlock::from_err(ShellError::IsADirectory(
                target.to_string(),
            ))],
            None => not_found(),
        }
    }

    fn run_open(&self, lower: &str) -> (Vec<OutputBlock>, Option<Signal>) {
        let parts: Vec<&str> = lower.split_whitespace().collect();
        let id = match parts.as_slice() {
            [_, arg] => match arg.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    return (
                        vec![OutputBlock::from_err(ShellError::Usage("open <number>"))],
                        None,
                    )
                }
            },
            _ => {
                return (
                    vec![OutputBlock::from_err(ShellError::Usage("open <number>"))],
                    None,
                )
            }
        };
        match content::find_project(id) {
            Some(project) => (
                vec![OutputBlock::success(format!("Opening {}...", project.label))],
                Some(Signal::OpenUrl {
                    href: project.url.to_string(),
                }),
            ),
            None => (
                vec![OutputBlock::from_err(ShellError::UnknownProject(id))],
                None,
            ),
        }
    }

    fn run_theme(&self, lower: &str) -> (Vec<OutputBlock>, Option<Signal>) {
        let name = lower.strip_prefix("theme").unwrap_or_default().trim();
        if name.is_empty() {
            return (
                vec![OutputBlock::text(format!(
                    "Usage: theme <name>\nAvailable themes: {}",
                    theme::available()
                ))],
                None,
            );
        }
        match theme::find(name) {
            Some(t) => (
                vec![OutputBlock::text(format!("Theme changed to {}", t.name))],
                Some(Signal::SwitchTheme {
                    name: t.name.to_string(),
                }),
            ),
            None => (
                vec![OutputBlock::from_err(ShellError::UnknownTheme {
                    name: name.to_string(),
                    available: theme::available(),
                })],
                None,
            ),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::transport::Transport;

    fn setup() -> (Interpreter, Session) {
        (Interpreter::new(), Session::new())
    }

    fn single_output(session: &Session, sub: &Submission) -> Vec<OutputBlock> {
        assert_eq!(sub.entries.len(), 1, "expected exactly one entry");
        session
            .transcript()
            .iter()
            .find(|e| e.id == sub.entries[0])
            .unwrap()
            .output
            .clone()
    }

    #[test]
    fn blank_input_is_a_noop() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "   ");
        assert_eq!(sub, Submission::default());
        assert!(session.transcript().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_command_yields_one_error_with_the_input() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "foo123");
        let output = single_output(&session, &sub);
        assert_eq!(
            output,
            vec![OutputBlock::error(
                "Command not found: foo123. Type 'help' for available commands."
            )]
        );
    }

    #[test]
    fn slash_prefix_is_an_alias() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "/whoami");
        let output = single_output(&session, &sub);
        assert_eq!(output, vec![OutputBlock::text("visitor@portfolio")]);
        // transcript keeps the original text, slash included
        assert_eq!(session.transcript()[0].command, "/whoami");
    }

    #[test]
    fn ls_sorts_directories_before_files() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "ls");
        let output = single_output(&session, &sub);
        let names: Vec<&str> = output
            .iter()
            .map(|b| match b {
                OutputBlock::Text { content } => content.as_str(),
                other => panic!("unexpected block {:?}", other),
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "projects/",
                "skills/",
                "README.md",
                "about.txt",
                "contact.txt",
                "portfolio.txt"
            ]
        );
    }

    #[test]
    fn cd_navigates_and_records_presubmit_path() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "cd projects");
        assert!(single_output(&session, &sub).is_empty());
        assert_eq!(session.path_string(), "~/projects");
        // the entry snapshots the path that was active at submit time
        assert_eq!(session.transcript()[0].path, "~");

        let sub = interp.submit(&mut session, "ls");
        let output = single_output(&session, &sub);
        assert_eq!(output.len(), 4);
        assert_eq!(session.transcript()[1].path, "~/projects");
    }

    #[test]
    fn cd_dotdot_pops_and_is_a_noop_at_root() {
        let (interp, mut session) = setup();
        interp.submit(&mut session, "cd skills");
        let sub = interp.submit(&mut session, "cd ..");
        assert!(single_output(&session, &sub).is_empty());
        assert_eq!(session.path_string(), "~");

        let sub = interp.submit(&mut session, "cd ..");
        assert!(single_output(&session, &sub).is_empty());
        assert_eq!(session.path_string(), "~");
    }

    #[test]
    fn cd_tilde_always_returns_to_root() {
        let (interp, mut session) = setup();
        interp.submit(&mut session, "cd projects");
        interp.submit(&mut session, "cd ~");
        assert_eq!(session.path_string(), "~");
        interp.submit(&mut session, "cd ~");
        assert_eq!(session.path_string(), "~");
        // bare cd goes home too
        interp.submit(&mut session, "cd skills");
        interp.submit(&mut session, "cd");
        assert_eq!(session.path_string(), "~");
    }

    #[test]
    fn cd_lookup_is_case_insensitive_but_stores_canonical_case() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "cd PROJECTS");
        assert!(single_output(&session, &sub).is_empty());
        assert_eq!(session.path_string(), "~/projects");
    }

    #[test]
    fn cd_failures_leave_the_path_unchanged() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "cd about.txt");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error("cd: about.txt: Not a directory")]
        );
        assert_eq!(session.path_string(), "~");

        let sub = interp.submit(&mut session, "cd nothing");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error("cd: nothing: No such file or directory")]
        );
        assert_eq!(session.path_string(), "~");
    }

    #[test]
    fn cat_reads_files_and_rejects_directories() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "cat about.txt");
        let output = single_output(&session, &sub);
        match &output[..] {
            [OutputBlock::Text { content }] => {
                assert!(content.starts_with("I am a Computer Science undergraduate"));
            }
            other => panic!("expected file content, got {:?}", other),
        }

        let sub = interp.submit(&mut session, "cat projects");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error("cat: projects: Is a directory")]
        );

        let sub = interp.submit(&mut session, "cat");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error("Usage: cat <filename>")]
        );

        let sub = interp.submit(&mut session, "cat ghost.txt");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error("cat: ghost.txt: No such file or directory")]
        );
    }

    #[test]
    fn open_emits_url_signal_for_known_projects() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "open 4");
        let output = single_output(&session, &sub);
        assert_eq!(
            output,
            vec![OutputBlock::success("Opening CLI Portfolio (This website!)...")]
        );
        assert_eq!(
            sub.signals,
            vec![Signal::OpenUrl {
                href: "https://github.com/Gurukrishnaa/cli-portfolio".to_string()
            }]
        );
    }

    #[test]
    fn open_rejects_unknown_and_malformed_ids() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "open 99");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error("Project 99 not found.")]
        );
        assert!(sub.signals.is_empty());

        for bad in ["open", "open abc", "open 1 2"] {
            let sub = interp.submit(&mut session, bad);
            assert_eq!(
                single_output(&session, &sub),
                vec![OutputBlock::error("Usage: open <number>")],
                "input {:?}",
                bad
            );
            assert!(sub.signals.is_empty());
        }
    }

    #[test]
    fn theme_switching_and_errors() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "theme amber");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::text("Theme changed to amber")]
        );
        assert_eq!(
            sub.signals,
            vec![Signal::SwitchTheme {
                name: "amber".to_string()
            }]
        );

        let sub = interp.submit(&mut session, "theme neon");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::error(
                "Theme 'neon' not found. Available: matrix, cyberpunk, amber, dracula"
            )]
        );
        assert!(sub.signals.is_empty());

        let sub = interp.submit(&mut session, "theme");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::text(
                "Usage: theme <name>\nAvailable themes: matrix, cyberpunk, amber, dracula"
            )]
        );
    }

    #[test]
    fn clear_empties_the_transcript_and_signals_the_ui() {
        let (interp, mut session) = setup();
        interp.submit(&mut session, "ls");
        interp.submit(&mut session, "whoami");
        assert_eq!(session.transcript().len(), 2);

        let sub = interp.submit(&mut session, "clear");
        assert!(sub.entries.is_empty());
        assert_eq!(sub.signals, vec![Signal::ClearTranscript]);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn snake_only_signals_the_game() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "snake");
        assert!(sub.entries.is_empty());
        assert_eq!(sub.signals, vec![Signal::LaunchGame]);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn shutdown_halts_and_asks_the_window_to_close() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "shutdown");
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::text("System halting...")]
        );
        assert_eq!(sub.signals, vec![Signal::CloseWindow]);
    }

    #[test]
    fn email_dialogue_round_trip() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "contact");
        let output = single_output(&session, &sub);
        assert_eq!(output.len(), 4);
        assert_eq!(output[3], OutputBlock::text("Your Name:"));
        assert_eq!(session.dialogue_step(), 1);
        assert_eq!(session.prompt(), "Name >");

        for (value, step, prompt) in [("A", 2, "Your Email:"), ("B", 3, "Subject:"), ("C", 4, "Message:")] {
            let sub = interp.submit(&mut session, value);
            assert_eq!(sub.entries.len(), 2);
            // echo first, then the next field prompt
            let entries: Vec<_> = session
                .transcript()
                .iter()
                .filter(|e| sub.entries.contains(&e.id))
                .collect();
            assert_eq!(entries[0].output, vec![OutputBlock::text(value)]);
            assert_eq!(entries[1].output, vec![OutputBlock::text(prompt)]);
            assert_eq!(session.dialogue_step(), step);
        }

        let sub = interp.submit(&mut session, "D");
        assert_eq!(session.dialogue_step(), 0);
        assert_eq!(session.prompt(), "›");
        let draft = match &sub.signals[..] {
            [Signal::SendDraft { draft }] => draft.clone(),
            other => panic!("expected send signal, got {:?}", other),
        };
        assert_eq!(
            draft,
            EmailDraft {
                name: "A".into(),
                email: "B".into(),
                subject: "C".into(),
                message: "D".into(),
            }
        );

        // the mock collaborator receives exactly the finalized draft
        let transport = MockTransport::succeeding();
        let outcome = transport.send(&draft);
        assert_eq!(transport.sent.borrow().as_slice(), &[draft]);
        let id = interp.resolve_transport(&mut session, outcome);
        let entry = session.transcript().iter().find(|e| e.id == id).unwrap();
        assert_eq!(
            entry.output,
            vec![
                OutputBlock::success("Message queued for deliver to gurukrishnaa.k@gmail.com"),
                OutputBlock::text("Transmission complete."),
            ]
        );
    }

    #[test]
    fn dialogue_treats_blank_and_command_lookalikes_verbatim() {
        let (interp, mut session) = setup();
        interp.submit(&mut session, "contact");
        // blank is a legal name, not a no-op
        let sub = interp.submit(&mut session, "");
        assert_eq!(sub.entries.len(), 2);
        assert_eq!(session.dialogue_step(), 2);
        // a line that looks like a command is captured, not dispatched
        interp.submit(&mut session, "clear");
        assert_eq!(session.dialogue_step(), 3);
        assert!(!session.transcript().is_empty());
    }

    #[test]
    fn transport_failure_reports_reason_and_fallback() {
        let (interp, mut session) = setup();
        let transport = MockTransport::failing("Transmission failed.");
        let outcome = transport.send(&EmailDraft::default());
        let id = interp.resolve_transport(&mut session, outcome);
        let entry = session.transcript().iter().find(|e| e.id == id).unwrap();
        assert_eq!(
            entry.output,
            vec![
                OutputBlock::error("Transmission Error: Transmission failed."),
                OutputBlock::text("Please try sending manually."),
            ]
        );
    }

    #[test]
    fn cancel_discards_the_partial_draft_at_any_step() {
        let (interp, mut session) = setup();
        interp.submit(&mut session, "contact");
        interp.submit(&mut session, "A");
        interp.submit(&mut session, "B");
        assert_eq!(session.dialogue_step(), 3);

        let entry = interp.cancel_dialogue(&mut session).unwrap();
        assert_eq!(session.dialogue_step(), 0);
        let aborted = session.transcript().iter().find(|e| e.id == entry).unwrap();
        assert_eq!(
            aborted.output,
            vec![OutputBlock::error("Transformation aborted.")]
        );

        // a fresh dialogue starts from an empty draft
        interp.submit(&mut session, "contact");
        for value in ["w", "x", "y"] {
            interp.submit(&mut session, value);
        }
        let sub = interp.submit(&mut session, "z");
        match &sub.signals[..] {
            [Signal::SendDraft { draft }] => {
                assert_eq!(draft.name, "w");
                assert_eq!(draft.message, "z");
            }
            other => panic!("expected send signal, got {:?}", other),
        }
    }

    #[test]
    fn cancel_outside_a_dialogue_does_nothing() {
        let (interp, mut session) = setup();
        assert!(interp.cancel_dialogue(&mut session).is_none());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_command_runs_the_hack_stages_in_place() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "test");
        let entry = sub.entries[0];
        assert_eq!(
            sub.signals,
            vec![Signal::Staged {
                entry,
                kind: StagedKind::Hack
            }]
        );
        assert_eq!(
            single_output(&session, &sub),
            vec![OutputBlock::text("Initializing hack protocol...")]
        );

        for stage in 1..=3 {
            let signals = interp.advance_stage(&mut session, entry, StagedKind::Hack, stage);
            assert!(signals.is_empty());
        }
        // one entry the whole way through, rewritten to the rickroll
        assert_eq!(session.transcript().len(), 1);
        let output = &session.transcript()[0].output;
        assert!(matches!(&output[1], OutputBlock::Image { .. }));
    }

    #[test]
    fn rm_rf_crashes_after_the_panic_stage() {
        let (interp, mut session) = setup();
        for literal in ["rm -rf /", "rm -rf /*"] {
            let sub = interp.submit(&mut session, literal);
            let entry = sub.entries[0];
            assert!(matches!(
                &sub.signals[..],
                [Signal::Staged {
                    kind: StagedKind::Crash,
                    ..
                }]
            ));
            let signals = interp.advance_stage(&mut session, entry, StagedKind::Crash, 1);
            assert_eq!(signals, vec![Signal::CrashAndRecover { delay_ms: 5000 }]);
        }
    }

    #[test]
    fn stale_staged_updates_cannot_touch_other_entries() {
        let (interp, mut session) = setup();
        let sub = interp.submit(&mut session, "test");
        let entry = sub.entries[0];
        // transcript cleared while the sequence is mid-flight
        interp.submit(&mut session, "clear");
        let signals = interp.advance_stage(&mut session, entry, StagedKind::Hack, 1);
        assert!(signals.is_empty());
        assert!(session.transcript().is_empty());

        // a later command gets a fresh id; the old sequence still misses
        let sub = interp.submit(&mut session, "ls");
        interp.advance_stage(&mut session, entry, StagedKind::Hack, 2);
        let ls_entry = session
            .transcript()
            .iter()
            .find(|e| e.id == sub.entries[0])
            .unwrap();
        assert!(ls_entry.output.len() > 3); // untouched ls listing
    }

    #[test]
    fn history_records_submissions_in_order() {
        let (interp, mut session) = setup();
        interp.submit(&mut session, "ls");
        interp.submit(&mut session, "   ");
        interp.submit(&mut session, "cd projects");
        assert_eq!(
            session.history(),
            &["ls".to_string(), "cd projects".to_string()]
        );
        assert_eq!(session.recall_prev(), Some("cd projects"));
    }
}
