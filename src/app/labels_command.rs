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

use anyhow::Result;
use app_helper::{App, AppSettings, ArgMatches, Command, SubCommand};
use lite_cnf::LabelQuery;
use std::io::Write;

pub(crate) struct LabelsCommand;

const CMD_NAME: &str = "labels";

impl LabelsCommand {
    pub fn new() -> Self {
        LabelsCommand
    }
}

impl<'a> Command<'a> for LabelsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes the labels involved in each input formula, once normalized.")
            .setting(AppSettings::DisableVersion)
            .arg(super::arg_input())
            .arg(super::arg_output())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let formulas = super::read_input(arg_matches)?;
        let mut out = super::create_output(arg_matches)?;
        for f in formulas.iter() {
            let mut labels = f.labels().into_iter().collect::<Vec<String>>();
            labels.sort_unstable();
            writeln!(out, "{}", labels.join(" "))?;
        }
        out.flush()?;
        Ok(())
    }
}
