// lite_cnf
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use crate::{BooleanFormula, LabelType};
use anyhow::Result;
use std::{fmt::Display, io::Write};

/// A writer for formulas, using the format read by [`FormulaReader`](crate::FormulaReader).
///
/// Each formula is written on its own line.
///
/// # Example
///
/// ```
/// use lite_cnf::{FormulaWriter, Literal};
///
/// let f = (Literal::new("a") | !Literal::new("b")) & Literal::new("c");
/// let mut output = Vec::new();
/// FormulaWriter::new().write(&[f], &mut output).unwrap();
/// assert_eq!("and(or(a, -b), c)\n", String::from_utf8(output).unwrap());
/// ```
#[derive(Default)]
pub struct FormulaWriter;

impl FormulaWriter {
    /// Creates a new formula writer.
    pub fn new() -> Self {
        FormulaWriter
    }

    /// Writes the formulas to the provided writer.
    ///
    /// # Arguments
    ///
    /// * `formulas` - the formulas
    /// * `writer` - the writer
    pub fn write<L>(&self, formulas: &[BooleanFormula<L>], writer: &mut dyn Write) -> Result<()>
    where
        L: LabelType + Display,
    {
        for f in formulas {
            writeln!(writer, "{}", f.default_display())?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormulaReader, Literal};

    #[test]
    fn test_write_constants() {
        let mut output = Vec::new();
        FormulaWriter::new()
            .write::<&str>(
                &[BooleanFormula::Tautology, BooleanFormula::Contradiction],
                &mut output,
            )
            .unwrap();
        assert_eq!("true\nfalse\n", String::from_utf8(output).unwrap());
    }

    #[test]
    fn test_write_nothing() {
        let mut output = Vec::new();
        FormulaWriter::new()
            .write::<&str>(&[], &mut output)
            .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let l = |s: &str| Literal::new(s.to_string());
        let formulas = vec![
            l("x") ^ l("y"),
            BooleanFormula::from(!l("x")),
            (l("x") | l("y")) & (!l("x") | l("z")),
        ];
        let mut output = Vec::new();
        FormulaWriter::new().write(&formulas, &mut output).unwrap();
        let read = FormulaReader::new().read(&mut output.as_slice()).unwrap();
        assert_eq!(formulas, read);
    }
}
