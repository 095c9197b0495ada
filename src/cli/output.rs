use crate::Conversion;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
#[error("unknown format: {0} (expected text or json)")]
pub struct ParseFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
    words: usize,
}

pub fn print_conversion(conversion: &Conversion, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", conversion.output),
        OutputFormat::Json => print_json_conversion(conversion),
    }
}

fn print_json_conversion(conversion: &Conversion) {
    let output = JsonConversion {
        input: conversion.input.clone(),
        output: conversion.output.clone(),
        words: conversion.word_count,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_usage(colored: bool) {
    if colored {
        println!("{}", "Usage: piglatin <TEXT>".bold());
        println!(
            "Run {} for the full option list.",
            "piglatin --help".cyan()
        );
    } else {
        println!("Usage: piglatin <TEXT>");
        println!("Run piglatin --help for the full option list.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
