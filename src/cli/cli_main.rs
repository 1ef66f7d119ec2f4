use super::cli_parameters::{ask_number, ask_order, prompt, read_line};
use crate::Kinetics::arrhenius::{activation_energy, rate_constant_expr};
use crate::Kinetics::explorer::KineticsExplorer;
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::series::SeriesTable;
use crate::Utils::report::{conditions_table, export_series_json, fit_table, series_table};
use crate::settings::ConfigManager;
use log::info;
use std::io::{self, BufRead, Write};

pub const DEFAULT_EXPORT_FILE: &str = "kinetics_series.json";

/// Terminal front end on stdin/stdout.
pub fn run_interactive_menu(mut manager: ConfigManager) -> Result<(), KineticsError> {
    let mut explorer = KineticsExplorer::new(manager.config())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(
        &mut explorer,
        &mut manager,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/* colors
Blue (\x1b[34m) - Welcome header text
Yellow (\x1b[33m) - Menu options
Cyan (\x1b[36m) - prompts
Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu<W: Write>(out: &mut W, explorer: &KineticsExplorer) -> io::Result<()> {
    let p = explorer.params();
    writeln!(
        out,
        "\x1b[34m\n Reaction Kinetics Explorer: temperature, concentration and catalysts \n\x1b[0m"
    )?;
    writeln!(out, "\x1b[33m1. Temperature: {} K\x1b[0m", p.temperature)?;
    writeln!(out, "\x1b[33m2. [A] Concentration: {:.2} M\x1b[0m", p.concentration_a)?;
    writeln!(out, "\x1b[33m3. [B] Concentration: {:.2} M\x1b[0m", p.concentration_b)?;
    writeln!(
        out,
        "\x1b[33m4. Catalyst: {}\x1b[0m",
        if p.catalyst { "on" } else { "off" }
    )?;
    writeln!(out, "\x1b[33m5. {}\x1b[0m", p.order)?;
    writeln!(out, "\x1b[33m6. Current conditions\x1b[0m")?;
    writeln!(out, "\x1b[33m7. Rate vs Temperature\x1b[0m")?;
    writeln!(out, "\x1b[33m8. Rate vs [A] Concentration\x1b[0m")?;
    writeln!(out, "\x1b[33m9. Arrhenius plot and fit\x1b[0m")?;
    writeln!(out, "\x1b[33m10. Symbolic k(T)\x1b[0m")?;
    writeln!(out, "\x1b[33m11. Export series to JSON\x1b[0m")?;
    writeln!(out, "\x1b[33m12. Save current parameters as start-up configuration\x1b[0m")?;
    writeln!(out, "\x1b[33m0. Exit\x1b[0m")?;
    write!(out, "\x1b[36mEnter your choice: \x1b[0m")?;
    out.flush()
}

fn report_change<W: Write>(out: &mut W, result: Result<(), KineticsError>) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "Updated, all series regenerated."),
        Err(e) => writeln!(out, "Error: {}", e),
    }
}

fn write_series<W: Write>(out: &mut W, series: &impl SeriesTable) -> io::Result<()> {
    writeln!(out, "\n{} ({} points):", series.title(), series.len())?;
    series_table(series).print(out)?;
    Ok(())
}

/// Menu loop over arbitrary input/output; ends on "0" or end of input.
pub fn run_menu<R: BufRead, W: Write>(
    explorer: &mut KineticsExplorer,
    manager: &mut ConfigManager,
    input: &mut R,
    out: &mut W,
) -> Result<(), KineticsError> {
    loop {
        show_main_menu(out, explorer)?;
        let Some(choice) = read_line(input)? else {
            writeln!(out, "\nGoodbye!")?;
            break;
        };

        match choice.as_str() {
            "1" => {
                let bound = explorer.bounds().temperature;
                let text = format!("Temperature, K ({}-{}): ", bound.min, bound.max);
                if let Some(value) = ask_number(input, out, &text)? {
                    report_change(out, explorer.set_temperature(value))?;
                }
            }
            "2" => {
                let bound = explorer.bounds().concentration;
                let text = format!("[A], M ({}-{}): ", bound.min, bound.max);
                if let Some(value) = ask_number(input, out, &text)? {
                    report_change(out, explorer.set_concentration_a(value))?;
                }
            }
            "3" => {
                let bound = explorer.bounds().concentration;
                let text = format!("[B], M ({}-{}): ", bound.min, bound.max);
                if let Some(value) = ask_number(input, out, &text)? {
                    report_change(out, explorer.set_concentration_b(value))?;
                }
            }
            "4" => {
                let catalyst = explorer.toggle_catalyst();
                writeln!(
                    out,
                    "Catalyst {} (Ea = {} kJ/mol)",
                    if catalyst { "added" } else { "removed" },
                    activation_energy(catalyst) / 1000.0
                )?;
            }
            "5" => {
                if let Some(order) = ask_order(input, out)? {
                    explorer.set_order(order);
                    report_change(out, Ok(()))?;
                }
            }
            "6" => {
                writeln!(out, "\nCurrent Conditions:")?;
                conditions_table(explorer.params(), &explorer.summary()).print(out)?;
            }
            "7" => write_series(out, &explorer.series().temperature)?,
            "8" => write_series(out, &explorer.series().concentration)?,
            "9" => {
                let arrhenius = &explorer.series().arrhenius;
                write_series(out, arrhenius)?;
                writeln!(out, "ln(k) = ln(A) - Ea/RT: the slope gives the activation energy")?;
                match (arrhenius.fit(false), arrhenius.fit(true)) {
                    (Ok(no), Ok(yes)) => {
                        fit_table(&no, &yes).print(out)?;
                    }
                    (Err(e), _) | (_, Err(e)) => writeln!(out, "Error: {}", e)?,
                }
            }
            "10" => {
                writeln!(out, "k(T), no catalyst:   {}", rate_constant_expr(false))?;
                writeln!(out, "k(T), with catalyst: {}", rate_constant_expr(true))?;
            }
            "11" => {
                let text = format!("File name [{}]: ", DEFAULT_EXPORT_FILE);
                let Some(answer) = prompt(input, out, &text)? else {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                };
                let path = if answer.is_empty() {
                    DEFAULT_EXPORT_FILE.to_string()
                } else {
                    answer
                };
                match export_series_json(explorer.params(), explorer.series(), &path) {
                    Ok(()) => writeln!(out, "Series written to {}", path)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            "12" => {
                let result = manager
                    .set_initial(*explorer.params())
                    .and_then(|_| manager.save_config());
                match result {
                    Ok(()) => writeln!(
                        out,
                        "Configuration saved to {}",
                        manager.config_file().display()
                    )?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            "0" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
    info!("menu closed after {} regenerations", explorer.generation());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::arrhenius::ReactionOrder;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    fn session_in(dir: &Path, script: &str) -> (KineticsExplorer, ConfigManager, String) {
        let mut manager = ConfigManager::with_config_file(dir.join("cfg.json")).unwrap();
        let mut explorer = KineticsExplorer::new(manager.config()).unwrap();
        let mut out = Vec::new();
        run_menu(
            &mut explorer,
            &mut manager,
            &mut Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        (explorer, manager, String::from_utf8(out).unwrap())
    }

    fn session(script: &str) -> (KineticsExplorer, ConfigManager, String) {
        let dir = tempdir().unwrap();
        session_in(dir.path(), script)
    }

    #[test]
    fn test_parameter_changes() {
        let (explorer, _, text) = session("1\n350\n2\n2.5\n3\n0.5\n4\n5\n1\n6\n0\n");
        let p = explorer.params();
        assert_eq!(p.temperature, 350.0);
        assert_eq!(p.concentration_a, 2.5);
        assert_eq!(p.concentration_b, 0.5);
        assert!(p.catalyst);
        assert_eq!(p.order, ReactionOrder::First);
        assert!(text.contains("Current Conditions"));
        assert!(text.contains("Catalyst added"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_bad_input_keeps_state() {
        let (explorer, _, text) = session("1\nhot\n1\n500\n42\n0\n");
        assert_eq!(explorer.params().temperature, 298.0);
        assert_eq!(explorer.generation(), 1);
        assert!(text.contains("Invalid number"));
        assert!(text.contains("out of range"));
        assert!(text.contains("Invalid choice"));
    }

    #[test]
    fn test_series_views_and_eof() {
        let (_, _, text) = session("7\n8\n9\n10\n");
        assert!(text.contains("Rate vs Temperature (21 points)"));
        assert!(text.contains("Rate vs [A] Concentration (30 points)"));
        assert!(text.contains("Arrhenius Plot (11 points)"));
        assert!(text.contains("Ea from slope"));
        assert!(text.contains("k(T), with catalyst"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_export_and_save() {
        let dir = tempdir().unwrap();
        let export = dir.path().join("series.json");
        let script = format!("11\n{}\n12\n0\n", export.display());
        let (_, manager, text) = session_in(dir.path(), &script);
        assert!(export.exists());
        assert!(text.contains("Series written to"));
        assert!(text.contains("Configuration saved to"));
        assert!(manager.config_file().exists());
    }

    #[test]
    fn test_eof_at_file_name_prompt_exits_without_export() {
        let (_, _, text) = session("11\n");
        assert!(text.contains("File name ["));
        assert!(!text.contains("Series written to"));
        assert!(!text.contains("Error:"));
        assert!(text.trim_end().ends_with("Goodbye!"));
    }
}
