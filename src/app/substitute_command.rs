// cnf_tool
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

use anyhow::{anyhow, Context, Result};
use app_helper::{info, App, AppSettings, Arg, ArgMatches, Command, SubCommand};
use lite_cnf::{BooleanFormula, FormulaReader, FormulaWriter, Substitution};

pub(crate) struct SubstituteCommand;

const CMD_NAME: &str = "substitute";

const ARG_LABEL: &str = "LABEL";
const ARG_REPLACEMENT: &str = "REPLACEMENT";

impl SubstituteCommand {
    pub fn new() -> Self {
        SubstituteCommand
    }
}

impl<'a> Command<'a> for SubstituteCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Replaces a label by a formula in each input formula.")
            .setting(AppSettings::DisableVersion)
            .arg(super::arg_input())
            .arg(
                Arg::with_name(ARG_LABEL)
                    .long("label")
                    .short("l")
                    .takes_value(true)
                    .help("sets the label to replace")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_REPLACEMENT)
                    .long("replacement")
                    .short("r")
                    .takes_value(true)
                    .help("sets the replacement formula")
                    .required(true),
            )
            .arg(super::arg_output())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let reader = FormulaReader::new();
        let label = read_label(&reader, arg_matches.value_of(ARG_LABEL).context("missing label")?)?;
        let replacement = reader
            .read_formula_from_str(
                arg_matches
                    .value_of(ARG_REPLACEMENT)
                    .context("missing replacement formula")?,
            )
            .context("while reading the replacement formula")?;
        let formulas = super::read_input(arg_matches)?;
        info!(
            r#"replacing label "{}" by {}"#,
            label,
            replacement.default_display()
        );
        let substituted = formulas
            .iter()
            .map(|f| f.substitute(&label, &replacement))
            .collect::<Vec<BooleanFormula<String>>>();
        let mut out = super::create_output(arg_matches)?;
        FormulaWriter::new().write(&substituted, &mut out)
    }
}

fn read_label(reader: &FormulaReader, s: &str) -> Result<String> {
    match reader.read_formula_from_str(s) {
        Ok(BooleanFormula::Literal(l)) if !l.is_negated() => Ok(l.label().clone()),
        _ => Err(anyhow!(r#"invalid label "{}""#, s)),
    }
}
