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

//! A module used to read formulas written in prefix notation.
use crate::{BooleanFormula, Literal, Negation};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{Match, Regex};
use std::{
    io::{BufRead, BufReader, Read},
    iter::Peekable,
};

const LABEL_PATTERN: &str = r"[_[:alpha:]][_[:alpha:]\d]*";

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(&format!(r"{}|[-~(),]|\S", LABEL_PATTERN)).unwrap();
    static ref LABEL_TOKEN_PATTERN: Regex = Regex::new(&format!(r"^{}$", LABEL_PATTERN)).unwrap();
}

/// A reader for formulas written in prefix notation.
///
/// A formula is either a constant (`true` or `false`), a literal (`x`, `-x` or `~x`),
/// or an operator applied to a list of formulas (`and(...)`, `or(...)`, `xor(...)` or `not(...)`).
/// Labels begin with a letter or an underscore, followed by letters, underscores and digits.
///
/// The formulas are normalized while they are read,
/// so the result of the reading may be a constant even if the text involves labels.
///
/// # Example
///
/// ```
/// use lite_cnf::{FormulaReader, Literal};
///
/// let reader = FormulaReader::new();
/// let f = reader.read_formula_from_str("and(or(a, -b), not(c))").unwrap();
/// assert_eq!(
///     (Literal::new("a".to_string()) | !Literal::new("b".to_string())) & !Literal::new("c".to_string()),
///     f
/// );
/// ```
#[derive(Default)]
pub struct FormulaReader;

impl FormulaReader {
    /// Builds a new formula reader.
    pub fn new() -> Self {
        FormulaReader
    }

    /// Reads a formula from a string.
    ///
    /// The whole string must be consumed by the formula.
    pub fn read_formula_from_str(&self, s: &str) -> Result<BooleanFormula<String>> {
        let mut tokens = TOKEN_PATTERN.find_iter(s).peekable();
        let formula = read_formula(&mut tokens)?;
        match tokens.next() {
            Some(t) => Err(unexpected_token(&t)),
            None => Ok(formula),
        }
    }

    /// Reads a list of formulas, one per line.
    ///
    /// Empty lines and lines beginning with a `#` are ignored.
    pub fn read(&self, reader: &mut dyn Read) -> Result<Vec<BooleanFormula<String>>> {
        let br = BufReader::new(reader);
        let mut formulas = vec![];
        for (i, line) in br.lines().enumerate() {
            let line = line.with_context(|| format!("while reading line {}", i + 1))?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            formulas.push(
                self.read_formula_from_str(content)
                    .with_context(|| format!("while reading the formula at line {}", i + 1))?,
            );
        }
        debug!("read {} formulas", formulas.len());
        Ok(formulas)
    }
}

type Tokens<'a, 'b> = Peekable<regex::Matches<'a, 'b>>;

fn unexpected_token(token: &Match<'_>) -> anyhow::Error {
    anyhow!(
        r#"unexpected token "{}" at position {}"#,
        token.as_str(),
        token.start() + 1
    )
}

fn next_token<'t>(tokens: &mut Tokens<'_, 't>) -> Result<Match<'t>> {
    tokens
        .next()
        .ok_or_else(|| anyhow!("unexpected end of formula"))
}

fn read_formula(tokens: &mut Tokens<'_, '_>) -> Result<BooleanFormula<String>> {
    let token = next_token(tokens)?;
    match token.as_str() {
        "-" | "~" => {
            let label = next_token(tokens)?;
            if !LABEL_TOKEN_PATTERN.is_match(label.as_str()) {
                return Err(unexpected_token(&label));
            }
            Ok(Literal::with_negation(label.as_str().to_string(), true).into())
        }
        t if LABEL_TOKEN_PATTERN.is_match(t) => {
            if tokens.peek().map(|p| p.as_str() == "(").unwrap_or(false) {
                tokens.next();
                let operands = read_operands(tokens)?;
                apply_operator(&token, operands)
            } else {
                Ok(match t {
                    "true" => BooleanFormula::Tautology,
                    "false" => BooleanFormula::Contradiction,
                    _ => Literal::new(t.to_string()).into(),
                })
            }
        }
        _ => Err(unexpected_token(&token)),
    }
}

fn read_operands(tokens: &mut Tokens<'_, '_>) -> Result<Vec<BooleanFormula<String>>> {
    let mut operands = vec![];
    if tokens.peek().map(|p| p.as_str() == ")").unwrap_or(false) {
        tokens.next();
        return Ok(operands);
    }
    loop {
        operands.push(read_formula(tokens)?);
        let separator = next_token(tokens)?;
        match separator.as_str() {
            "," => continue,
            ")" => return Ok(operands),
            _ => return Err(unexpected_token(&separator)),
        }
    }
}

fn apply_operator(
    operator: &Match<'_>,
    operands: Vec<BooleanFormula<String>>,
) -> Result<BooleanFormula<String>> {
    match operator.as_str() {
        "and" => Ok(operands
            .into_iter()
            .fold(BooleanFormula::Tautology, BooleanFormula::and)),
        "or" => Ok(operands
            .into_iter()
            .fold(BooleanFormula::Contradiction, BooleanFormula::or)),
        "xor" => Ok(operands
            .into_iter()
            .fold(BooleanFormula::Contradiction, BooleanFormula::xor)),
        "not" => {
            let n_operands = operands.len();
            let mut it = operands.into_iter();
            match (it.next(), it.next()) {
                (Some(f), None) => Ok(f.negate()),
                _ => Err(anyhow!(
                    "operator not expects exactly one operand, got {} (position {})",
                    n_operands,
                    operator.start() + 1
                )),
            }
        }
        op => Err(anyhow!(
            r#"unknown operator "{}" at position {}"#,
            op,
            operator.start() + 1
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F = BooleanFormula<String>;

    fn l(label: &str) -> Literal<String> {
        Literal::new(label.to_string())
    }

    fn read(s: &str) -> Result<F> {
        FormulaReader::new().read_formula_from_str(s)
    }

    #[test]
    fn test_read_constants() {
        assert_eq!(F::Tautology, read("true").unwrap());
        assert_eq!(F::Contradiction, read(" false ").unwrap());
    }

    #[test]
    fn test_read_literals() {
        assert_eq!(F::from(l("x")), read("x").unwrap());
        assert_eq!(F::from(!l("x_1")), read("-x_1").unwrap());
        assert_eq!(F::from(!l("_y")), read("~ _y").unwrap());
    }

    #[test]
    fn test_read_operators() {
        assert_eq!((l("a") | !l("b")) & l("c"), read("and(or(a, -b), c)").unwrap());
        assert_eq!(l("a") ^ l("b"), read("xor(a,b)").unwrap());
        assert_eq!(!l("a") | !l("b"), read("not(and(a, b))").unwrap());
    }

    #[test]
    fn test_read_nary_operators() {
        assert_eq!(l("a") & l("b") & l("c"), read("and(a, b, c)").unwrap());
        assert_eq!(F::from(l("a")), read("or(a)").unwrap());
    }

    #[test]
    fn test_read_empty_operators() {
        assert_eq!(F::Tautology, read("and()").unwrap());
        assert_eq!(F::Contradiction, read("or()").unwrap());
        assert_eq!(F::Contradiction, read("xor()").unwrap());
    }

    #[test]
    fn test_read_normalizes() {
        assert_eq!(F::Contradiction, read("and(a, -a)").unwrap());
        assert_eq!(F::Tautology, read("or(a, not(a))").unwrap());
    }

    #[test]
    fn test_read_default_display() {
        let f = (l("a") | !l("b")) & (l("b") | l("c")) & !l("d");
        assert_eq!(f, read(&format!("{}", f.default_display())).unwrap());
    }

    #[test]
    fn test_unknown_operator() {
        assert!(read("nand(a, b)").is_err());
    }

    #[test]
    fn test_not_arity() {
        assert!(read("not(a, b)").is_err());
        assert!(read("not()").is_err());
    }

    #[test]
    fn test_syntax_errors() {
        assert!(read("").is_err());
        assert!(read("and(a, b").is_err());
        assert!(read("and(a b)").is_err());
        assert!(read("a b").is_err());
        assert!(read("-(a)").is_err());
        assert!(read("1a").is_err());
        assert!(read(")").is_err());
    }

    #[test]
    fn test_read_lines() {
        let content = "# a comment\n\nand(a, b)\n  \nor(a, -b)\n";
        let formulas = FormulaReader::new().read(&mut content.as_bytes()).unwrap();
        assert_eq!(vec![l("a") & l("b"), l("a") | !l("b")], formulas);
    }

    #[test]
    fn test_read_lines_error_has_line_number() {
        let content = "and(a, b)\nor(a,\n";
        let err = FormulaReader::new().read(&mut content.as_bytes()).unwrap_err();
        assert!(format!("{}", err).contains("line 2"));
    }
}
