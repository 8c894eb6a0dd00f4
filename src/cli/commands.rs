use clap::Parser;

/// Reads text from standard input and prints grammar corrections.
///
/// The Gemini credential is read from `GEMINI_API_KEY`, either in the
/// environment or in a `.env` file in the working directory.
#[derive(Parser, Debug)]
#[command(name = "grammar-checker")]
#[command(author, version, about = "Interactive grammar checker powered by Gemini", long_about = None)]
pub struct Cli {}
