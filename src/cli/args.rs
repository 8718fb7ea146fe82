//! Command-line surface.
//!
//! The tool historically takes single-dash long flags (`-major`, `-pretend`,
//! `-path dir`) and DOS-style help (`/?`). [normalize_args] rewrites those to
//! the `--long` form before clap sees them, so both spellings work.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::domain::{BumpKind, ReleaseIntent};

/// Long flags that may also be written with a single dash
const LONG_FLAGS: &[&str] = &[
    "major", "minor", "revision", "none", "gem", "publish", "pretend", "dry-run", "path",
    "config", "help", "version",
];

/// Flags whose next argument is a value and must not be rewritten
const VALUE_FLAGS: &[&str] = &["--path", "--config"];

const HELP_ALIASES: &[&str] = &["-h", "-help", "--help", "/h", "/help", "/?", "-?"];

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "git-bump",
    version,
    args_override_self = true,
    about = "Bump the project version file, commit, tag and push",
    after_help = "Flags may also be written with a single dash, e.g. -minor or -pretend."
)]
pub struct Args {
    #[arg(help = "Commit and tag message (defaults to one derived from the bump kind)")]
    pub message: Option<String>,

    #[arg(
        long,
        overrides_with_all = ["minor", "revision", "none"],
        help = "Increment the major version"
    )]
    pub major: bool,

    #[arg(
        long,
        overrides_with_all = ["major", "revision", "none"],
        help = "Increment the minor version"
    )]
    pub minor: bool,

    #[arg(
        long,
        overrides_with_all = ["major", "minor", "none"],
        help = "Increment the revision (default)"
    )]
    pub revision: bool,

    #[arg(
        long,
        overrides_with_all = ["major", "minor", "revision"],
        help = "Keep the version, only tag it"
    )]
    pub none: bool,

    #[arg(long = "gem", visible_alias = "publish", help = "Publish the package after tagging")]
    pub publish: bool,

    #[arg(
        long,
        visible_alias = "dry-run",
        help = "Show what would happen without changing anything"
    )]
    pub pretend: bool,

    #[arg(long, value_name = "DIR", help = "Run as if started in DIR")]
    pub path: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Configuration file to use")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Bump kind selected by the flags; the last one given wins
    pub fn bump_kind(&self) -> BumpKind {
        if self.major {
            BumpKind::Major
        } else if self.minor {
            BumpKind::Minor
        } else if self.none {
            BumpKind::NoChange
        } else {
            BumpKind::Revision
        }
    }

    /// Resolve into the immutable run intent; relative paths are taken from `cwd`
    pub fn into_intent(self, cwd: &Path) -> ReleaseIntent {
        let bump = self.bump_kind();
        let root = match self.path {
            Some(path) => cwd.join(path),
            None => cwd.to_path_buf(),
        };

        ReleaseIntent {
            bump,
            dry_run: self.pretend,
            message: self.message,
            publish: self.publish,
            root,
            config_path: self.config.map(|c| cwd.join(c)),
        }
    }
}

/// Rewrite legacy flag spellings into the form clap understands
///
/// The first item (program name), values following `-path`/`-config`, and
/// everything after `--` pass through untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = Vec::new();
    let mut iter = args.into_iter().map(Into::into);
    if let Some(program) = iter.next() {
        out.push(program);
    }

    let mut expect_value = false;
    let mut passthrough = false;
    for arg in iter {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let normalized = if HELP_ALIASES.contains(&arg.as_str()) {
            "--help".to_string()
        } else if arg.starts_with('-')
            && !arg.starts_with("--")
            && LONG_FLAGS.contains(&&arg[1..])
        {
            format!("-{}", arg)
        } else {
            arg
        };

        expect_value = VALUE_FLAGS.contains(&normalized.as_str());
        out.push(normalized);
    }
    out
}
