use std::io::{self, BufRead, Write};

use crate::cli::commands::{entry, exit, report, stats};
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the interactive menu, reading choices from stdin.
///
/// Errors from an option are printed and the menu is shown again. The
/// loop ends on option 5 or when stdin closes.
pub fn execute(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    run(ctx, &mut stdin.lock())
}

fn run<R: BufRead>(ctx: &Context, input: &mut R) -> Result<()> {
    loop {
        print_menu();

        let Some(choice) = prompt(input, "\nSeleccione una opción: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => match prompt(input, "Ingrese el nombre: ")? {
                Some(name) => entry::execute(ctx, &name, None),
                None => break,
            },
            "2" => match prompt(input, "Ingrese el nombre: ")? {
                Some(name) => exit::execute(ctx, &name, None),
                None => break,
            },
            "3" => match prompt(input, "Ingrese el nombre para el reporte: ")? {
                Some(name) => report::execute(ctx, &name, false),
                None => break,
            },
            "4" => stats::execute(ctx, false),
            "5" => break,
            _ => {
                output::warning("Opción no válida. Intente de nuevo.");
                Ok(())
            }
        };

        if let Err(e) = result {
            output::error(&format!("Error: {e}"));
        }
    }

    println!("¡Hasta luego!");
    Ok(())
}

fn print_menu() {
    output::header("===== SISTEMA DE GESTIÓN DE ASISTENCIA =====");
    println!("1. Registrar entrada");
    println!("2. Registrar salida");
    println!("3. Generar reporte individual");
    println!("4. Visualizar estadísticas");
    println!("5. Salir");
}

/// Print `msg` and read one trimmed line. `None` means stdin is closed.
fn prompt<R: BufRead>(input: &mut R, msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
