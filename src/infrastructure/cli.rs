use clap::{Parser, Subcommand};

use crate::{
    domain::{potter::LetterGroup, year_range::YearRange},
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Number of pages to load before stopping
    #[arg(short, long, value_name = "N", default_value_t = 1, global = true)]
    pub pages: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Browse or search public-domain artworks
    Artworks {
        /// Free-text search; blank browses popular works
        #[arg(short, long)]
        search: Option<String>,
        /// Earliest start year (inclusive)
        #[arg(long, value_name = "YEAR", allow_negative_numbers = true)]
        from: Option<i32>,
        /// Latest start year (inclusive)
        #[arg(long, value_name = "YEAR", allow_negative_numbers = true)]
        to: Option<i32>,
    },
    /// Show one artwork and other works by the same artist
    Artwork { id: u64 },
    Books,
    /// Show one book and its chapters
    Book { id: String },
    Characters {
        /// Sort names Z-A instead of A-Z
        #[arg(long)]
        descending: bool,
        /// Only show names in this letter group (All, A-C, D-F, ... V-Z)
        #[arg(long, value_name = "GROUP", default_value = "All")]
        letters: LetterGroup,
    },
    Movies,
    Potions,
    Spells,
    /// Pick something at random from the Potter DB collections
    Recommend,
}

impl Command {
    /// Year filter given on the command line, if any
    pub fn year_range(&self) -> YearRange {
        match self {
            Command::Artworks { from, to, .. } => YearRange::new(*from, *to),
            _ => YearRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_artworks() {
        let cli = Cli::try_parse_from([
            "galleria", "--pages", "3", "artworks", "--search", "monet", "--from", "1900",
            "--to", "1850",
        ])
        .unwrap();
        assert_eq!(cli.pages, 3);
        assert_eq!(cli.command.year_range(), YearRange::new(Some(1850), Some(1900)));
    }

    #[test]
    fn test_parse_characters() {
        let cli = Cli::try_parse_from(["galleria", "characters", "--descending", "--letters", "S-U"])
            .unwrap();
        assert_eq!(cli.pages, 1);
        assert_eq!(
            cli.command,
            Command::Characters {
                descending: true,
                letters: LetterGroup::SToU,
            }
        );
    }

    #[test]
    fn test_parse_book_and_recommend() {
        let cli = Cli::try_parse_from(["galleria", "book", "b7"]).unwrap();
        assert_eq!(cli.command, Command::Book { id: "b7".into() });

        let cli = Cli::try_parse_from(["galleria", "recommend"]).unwrap();
        assert_eq!(cli.command, Command::Recommend);
        assert!(Cli::try_parse_from(["galleria", "book"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_letter_group() {
        assert!(Cli::try_parse_from(["galleria", "characters", "--letters", "Q"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
