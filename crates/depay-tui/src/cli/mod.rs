/*
[INPUT]:  Subcommand dispatch from the binary entry point
[OUTPUT]: Non-TUI command implementations
[POS]:    CLI command layer
[UPDATE]: When adding subcommands
*/

pub mod init;
