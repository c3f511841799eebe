use anyhow::Result;
use std::env;
use std::path::Path;

use beanopen::data;
use beanopen::ledger::book::Book;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run -- <workbook.xlsx>");
        std::process::exit(1);
    }

    let xlsx_path = Path::new(&args[1]);
    if !xlsx_path.exists() {
        eprintln!("file not found: {}", xlsx_path.display());
        std::process::exit(1);
    }

    let mut book = Book::new();
    data::process_workbook(xlsx_path, &mut book)?;
    data::export_bean(&book, Path::new("."))?;

    Ok(())
}
