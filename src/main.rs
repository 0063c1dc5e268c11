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

mod app;

use app::{LabelsCommand, NormalizeCommand, SubstituteCommand};
use app_helper::{AppHelper, Command};

fn main() {
    let mut app = AppHelper::new(
        option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name"),
        option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version"),
        "Emmanuel Lonca <lonca@cril.fr>",
        "cnf_tool, a tool to normalize propositional formulas into CNF.",
    );
    let commands: Vec<Box<dyn Command<'_>>> = vec![
        Box::new(NormalizeCommand::new()),
        Box::new(LabelsCommand::new()),
        Box::new(SubstituteCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app.launch_app();
}
