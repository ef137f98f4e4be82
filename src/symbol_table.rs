//! The symbol table report: one line per token, in scan order.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

pub fn write_entries<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()
}

pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

pub fn write_symbol_table(path: &Path, tokens: &[Token]) -> Result<(), Error> {
    let to_error = |source| Error::new(ErrorImpl::SymbolTableUnwritable { source }, path);

    let file = File::create(path).map_err(to_error)?;
    write_entries(&mut BufWriter::new(file), tokens).map_err(to_error)?;

    debug!(path = %path.display(), entries = tokens.len(), "wrote symbol table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::tokenize;

    #[test]
    fn test_entry_pads_value() {
        let tokens = tokenize("check");
        assert_eq!(tokens[0].to_string(), "Token: check           Type: KEYWORD");
        assert_eq!(tokens[1].to_string(), "Token: EOF             Type: EOF");
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let tokens = tokenize("a_rather_long_identifier");
        assert_eq!(
            tokens[0].to_string(),
            "Token: a_rather_long_identifier Type: IDENTIFIER"
        );
    }

    #[test]
    fn test_write_entries_matches_render() {
        let tokens = tokenize("int x = 5;");
        let mut out = Vec::new();
        write_entries(&mut out, &tokens).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), render(&tokens));
        assert_eq!(render(&tokens).lines().count(), 6);
    }

    #[test]
    fn test_unwritable_path() {
        let tokens = tokenize("x");
        let error = write_symbol_table(Path::new("no/such/dir/table.txt"), &tokens).unwrap_err();
        assert_eq!(error.get_error_name(), "SymbolTableUnwritable");
    }
}
