// Command-line flags and their translation into Photos API filter
// parameters. Each flag accepts a comma-separated list; quote titles
// containing spaces (e.g., --title 'title 1','title 2').

use clap::{ArgAction, CommandFactory, Parser};

/// Flag-driven surface of the tool. Every filter flag maps to one query
/// parameter name on the API side; `to_filters` performs that mapping.
#[derive(Parser, Debug)]
#[command(
    name = "photo-catalog",
    about = "Fetch photos from the photo catalog API, optionally filtered by \
             ID, album ID, title, URL, or thumbnail URL",
    disable_help_flag = true
)]
pub struct Cli {
    /// Filter photos by ID(s), comma-separated.
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub id: Vec<String>,

    /// Filter photos by album ID(s), comma-separated.
    #[arg(long = "albumid", value_name = "ALBUM_IDS", value_delimiter = ',')]
    pub albumid: Vec<String>,

    /// Filter photos by title(s), comma-separated; use quotes for titles
    /// with spaces.
    #[arg(long, value_name = "TITLES", value_delimiter = ',')]
    pub title: Vec<String>,

    /// Filter photos by URL(s), comma-separated.
    #[arg(long, value_name = "URLS", value_delimiter = ',')]
    pub url: Vec<String>,

    /// Filter photos by thumbnail URL(s), comma-separated.
    #[arg(long = "thumburl", value_name = "THUMB_URLS", value_delimiter = ',')]
    pub thumburl: Vec<String>,

    /// Display usage.
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    /// Translate the parsed flags into the filter mapping the Photos API
    /// understands. Only flags the user supplied produce an entry, and the
    /// flag spellings are mapped to the API's field names (`albumid`
    /// becomes `albumId`, `thumburl` becomes `thumbnailUrl`).
    pub fn to_filters(&self) -> Vec<(String, Vec<String>)> {
        let fields = [
            ("id", &self.id),
            ("albumId", &self.albumid),
            ("title", &self.title),
            ("url", &self.url),
            ("thumbnailUrl", &self.thumburl),
        ];

        let mut filters = Vec::new();
        for (key, values) in fields {
            if !values.is_empty() {
                filters.push((key.to_string(), values.clone()));
            }
        }
        filters
    }

    /// Print usage to stderr and terminate with a non-zero status, the
    /// same exit path clap takes for unknown flags.
    pub fn exit_with_usage() -> ! {
        let mut cmd = Cli::command();
        eprint!("{}", cmd.render_help());
        std::process::exit(2);
    }
}
