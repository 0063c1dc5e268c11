// app_helper
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
use clap::{App, ArgMatches};

/// A subcommand of an application.
///
/// The command provides its own `clap` subcommand;
/// when the user selects it, the matched arguments are given to [`execute`](Self::execute).
pub trait Command<'a> {
    /// The name of the command, as typed by the user.
    fn name(&self) -> &str;

    /// The `clap` description of the command and its arguments.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command.
    ///
    /// # Arguments
    ///
    /// * `arg_matches` - the arguments matched for this subcommand
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
