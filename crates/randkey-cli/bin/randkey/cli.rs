use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use randkey_core::{BuiltinCharset, TokenRegistry};
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const LENGTH_ENV: &str = "RANDKEY_LENGTH";
pub const COUNT_ENV: &str = "RANDKEY_COUNT";

pub const DEFAULT_LENGTH: &str = "12";
pub const DEFAULT_COUNT: &str = "1";

#[derive(Debug, Parser)]
#[command(
    name = "randkey",
    version,
    about = "Generate random keys from a configurable alphabet"
)]
pub struct CLI {
    /// Number of tokens per key.
    #[arg(short, long, env = LENGTH_ENV, default_value = DEFAULT_LENGTH)]
    pub length: NonZeroUsize,

    /// Number of keys to generate.
    #[arg(short, long, env = COUNT_ENV, default_value = DEFAULT_COUNT)]
    pub count: NonZeroUsize,

    /// Fully reproducible output from this seed.
    #[arg(short = 'S', long = "seed-only", value_name = "SEED")]
    pub deterministic_seed: Option<u64>,

    /// Mix this seed into secure random output.
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    pub mixing_seed: Option<u64>,

    // Class flags record every occurrence so the first one fixes the
    // position; a repeat adds nothing to the registry.
    /// Include lowercase, uppercase, digits and special characters.
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub all: Vec<bool>,

    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub lower: Vec<bool>,

    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub upper: Vec<bool>,

    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub digits: Vec<bool>,

    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    pub special: Vec<bool>,

    /// Add each character of CHARS as a token.
    #[arg(long, value_name = "CHARS")]
    pub append: Vec<String>,

    /// Add PHRASE as a single token.
    #[arg(long, value_name = "PHRASE")]
    pub append_token: Vec<String>,

    /// Add every character found in a file.
    #[arg(long, value_name = "PATH")]
    pub append_file: Vec<PathBuf>,

    /// Add every non-empty line of a file as a token.
    #[arg(long, value_name = "PATH")]
    pub append_file_token: Vec<PathBuf>,

    /// Write keys to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists.
    #[arg(long, requires = "output")]
    pub force: bool,

    /// Report the seeds used, on stderr.
    #[arg(long)]
    pub show_seed: bool,
}

/// One registry-building step, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetDirective {
    AllBuiltins,
    Builtin(BuiltinCharset),
    Characters(String),
    Token(String),
    File { path: PathBuf, as_phrase: bool },
}

impl CharsetDirective {
    pub fn apply(&self, registry: &mut TokenRegistry) -> randkey_core::error::Result<()> {
        match self {
            CharsetDirective::AllBuiltins => {
                registry.include_all_builtins();
            }
            CharsetDirective::Builtin(class) => {
                registry.include(*class);
            }
            CharsetDirective::Characters(chars) => {
                registry.add_characters(chars);
            }
            CharsetDirective::Token(phrase) => {
                registry.add_token(phrase);
            }
            CharsetDirective::File { path, as_phrase } => {
                registry.add_from_file(path, *as_phrase)?;
            }
        }
        Ok(())
    }
}

/// Parsed arguments plus the charset directives in the order given.
#[derive(Debug)]
pub struct Invocation {
    pub cli: CLI,
    pub directives: Vec<CharsetDirective>,
}

impl Invocation {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = CLI::command().try_get_matches_from(args)?;
        let cli = CLI::from_arg_matches(&matches)?;
        let directives = charset_directives(&matches);
        Ok(Self { cli, directives })
    }

    /// Builds the token registry by applying every directive in order.
    pub fn registry(&self) -> randkey_core::error::Result<TokenRegistry> {
        let mut registry = TokenRegistry::new();
        for directive in &self.directives {
            directive.apply(&mut registry)?;
        }
        Ok(registry)
    }
}

// Token insertion order is the selection index space, so directives must be
// replayed exactly as they appeared on the command line.
fn charset_directives(matches: &ArgMatches) -> Vec<CharsetDirective> {
    let mut ordered: Vec<(usize, CharsetDirective)> = Vec::new();

    let flags = [
        ("all", CharsetDirective::AllBuiltins),
        ("lower", CharsetDirective::Builtin(BuiltinCharset::Lowercase)),
        ("upper", CharsetDirective::Builtin(BuiltinCharset::Uppercase)),
        ("digits", CharsetDirective::Builtin(BuiltinCharset::Digits)),
        ("special", CharsetDirective::Builtin(BuiltinCharset::Special)),
    ];
    for (id, directive) in flags {
        if let Some(first) = matches.indices_of(id).and_then(|mut indices| indices.next()) {
            ordered.push((first, directive));
        }
    }

    collect_values(matches, "append", &mut ordered, |value: &String| {
        CharsetDirective::Characters(value.clone())
    });
    collect_values(matches, "append_token", &mut ordered, |value: &String| {
        CharsetDirective::Token(value.clone())
    });
    collect_values(matches, "append_file", &mut ordered, |path: &PathBuf| {
        CharsetDirective::File {
            path: path.clone(),
            as_phrase: false,
        }
    });
    collect_values(matches, "append_file_token", &mut ordered, |path: &PathBuf| {
        CharsetDirective::File {
            path: path.clone(),
            as_phrase: true,
        }
    });

    ordered.sort_by_key(|(index, _)| *index);
    ordered.into_iter().map(|(_, directive)| directive).collect()
}

fn collect_values<T, F>(
    matches: &ArgMatches,
    id: &str,
    ordered: &mut Vec<(usize, CharsetDirective)>,
    to_directive: F,
) where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> CharsetDirective,
{
    if let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<T>(id)) {
        ordered.extend(indices.zip(values).map(|(index, value)| (index, to_directive(value))));
    }
}
