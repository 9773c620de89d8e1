// src/commands/ls/mod.rs
use crate::fs::{NodeKind, Vfs};
use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Exit status when some operand could not be listed.
const EXIT_LS_TROUBLE: i32 = 2;

pub fn handle_ls(state: &InterpreterState, args: &[String]) -> Result<ExecResult, CommandError> {
    let Some(vfs) = &state.vfs else {
        return Ok(stub_ls(args));
    };

    let paths: Vec<String> = if args.is_empty() {
        vec![".".to_string()]
    } else {
        args.to_vec()
    };

    let mut stdout = String::new();
    let mut stderr = String::new();
    let mut exit_code = 0;
    let show_path_header = paths.len() > 1;

    for (idx, path) in paths.iter().enumerate() {
        let full_path = state.resolve(path);
        match list_one(vfs, &full_path) {
            Some(Listing::Directory(lines)) => {
                if show_path_header {
                    if idx > 0 {
                        stdout.push('\n');
                    }
                    stdout.push_str(&format!("{}:\n", path));
                }
                for line in lines {
                    stdout.push_str(&line);
                    stdout.push('\n');
                }
            }
            Some(Listing::File) => {
                stdout.push_str(&format!("{}\n", path));
            }
            None => {
                stderr.push_str(&format!(
                    "ls: cannot access '{}': No such file or directory\n",
                    path
                ));
                exit_code = EXIT_LS_TROUBLE;
            }
        }
    }

    Ok(ExecResult::new(stdout, stderr, exit_code))
}

enum Listing {
    Directory(Vec<String>),
    File,
}

fn list_one(vfs: &Vfs, full_path: &str) -> Option<Listing> {
    match vfs.list(full_path) {
        Ok(entries) => Some(Listing::Directory(
            entries
                .into_iter()
                .map(|e| match e.kind {
                    NodeKind::Directory => format!("{}/", e.name),
                    NodeKind::File => e.name,
                })
                .collect(),
        )),
        Err(_) if vfs.read_file(full_path).is_ok() => Some(Listing::File),
        Err(_) => None,
    }
}

/// Without a VFS, only report what would be listed.
fn stub_ls(args: &[String]) -> ExecResult {
    let shown = quoted_list(args);
    let mut stdout = format!("ls: command called with arguments: {}\n", shown);
    if args.is_empty() {
        stdout.push_str("ls: would list contents of current directory\n");
    } else {
        stdout.push_str(&format!("ls: would list contents of: {}\n", shown));
    }
    ExecResult::new(stdout, String::new(), 0)
}

/// `['a', 'b']`. An item holding `'` but no `"` is wrapped in `"`.
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| {
            let item = item.replace('\\', "\\\\");
            if item.contains('\'') && !item.contains('"') {
                format!("\"{}\"", item)
            } else {
                format!("'{}'", item.replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}
