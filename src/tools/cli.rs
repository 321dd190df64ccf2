use clap::Parser;
use log::{info, warn};

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Builds a Huffman code for a phrase, encodes it and decodes it again",
    long_about = None)]
pub struct Args {
    /// Phrase to encode. Prompted for on stdin if neither this nor --file is given
    #[clap()]
    text: Option<String>,

    /// Read the phrase from a file instead
    #[clap(short = 'f', long = "file")]
    file: Option<String>,

    /// Bits per raw symbol used as the baseline for the compression ratio
    #[clap(short = 'b', long = "bits", default_value_t = 8)]
    bits: usize,

    /// Print the code table
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Print the tree structure
    #[clap(short = 'T', long = "tree")]
    tree: bool,

    /// Sets verbosity. -v shows nothing, -vvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u8,
}

/// Where the input phrase comes from
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(String),
    Prompt,
}

/// All user settable options
#[derive(Debug)]
pub struct HuffOpts {
    /// Where to get the phrase to encode
    pub source: Source,
    /// Bits per raw symbol for the fixed width baseline
    pub bits_per_symbol: usize,
    /// Print the code table
    pub show_table: bool,
    /// Print the tree structure
    pub show_tree: bool,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            source: Source::Prompt,
            bits_per_symbol: 8,
            show_table: false,
            show_tree: false,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the command line into HuffOpts and set the log level.
pub fn huffopts_init() -> HuffOpts {
    huffopts_from(Args::parse())
}

/// Copy parsed arguments into our internal structure.
pub fn huffopts_from(args: Args) -> HuffOpts {
    let mut opts = HuffOpts::new();

    // A file wins over a phrase on the command line
    if let Some(file) = args.file {
        opts.source = Source::File(file);
        if args.text.is_some() {
            warn!("Both a phrase and a file were given, using the file");
        }
    } else if let Some(text) = args.text {
        opts.source = Source::Text(text);
    }
    if args.bits > 0 {
        opts.bits_per_symbol = args.bits;
    } else {
        warn!("Bits per symbol must be at least 1, keeping {}", opts.bits_per_symbol);
    }
    opts.show_table = args.table;
    opts.show_tree = args.tree;

    // Set the log level. No -v keeps the default (info).
    match args.v {
        1 => log::set_max_level(log::LevelFilter::Off),
        2 => log::set_max_level(log::LevelFilter::Error),
        0 | 3 => log::set_max_level(log::LevelFilter::Info),
        _ => log::set_max_level(log::LevelFilter::Debug),
    };

    info!("Verbosity set to {}", log::max_level());
    match &opts.source {
        Source::Text(_) => info!("Getting input from the command line"),
        Source::File(f) => info!("Getting input from the file {}", f),
        Source::Prompt => info!("Getting input from the terminal"),
    }
    info!("Ratio baseline is {} bits per symbol", opts.bits_per_symbol);
    opts
}
