pub mod about;
pub mod date;
pub mod help;
pub mod projects;
pub mod socials;
pub mod sudo;
pub mod whoami;
