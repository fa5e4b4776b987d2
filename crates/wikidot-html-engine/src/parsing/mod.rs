pub mod blocks;
pub mod context;
pub mod html;
pub mod inline;

use std::io::BufRead;

use crate::error::ConvertError;
use crate::options::ConvertOptions;

use blocks::BlockAssembler;

/// Converts whole documents with a fixed set of options.
///
/// Every call starts from a fresh context, so one converter can be reused
/// for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let mut assembler = BlockAssembler::new(self.options.clone());
        for line in input.lines() {
            assembler.push(line)?;
        }
        assembler.finish()
    }

    /// Converts a line stream, e.g. locked stdin.
    pub fn convert_reader<R: BufRead>(&self, reader: R) -> Result<String, ConvertError> {
        let mut assembler = BlockAssembler::new(self.options.clone());
        for line in reader.lines() {
            assembler.push(&line?)?;
        }
        assembler.finish()
    }
}

/// Converts `input` with the default options.
pub fn convert(input: &str) -> Result<String, ConvertError> {
    Converter::default().convert(input)
}
