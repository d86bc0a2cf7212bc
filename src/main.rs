use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use form::{FieldStatus, FieldValue};
use tax_domain::{InMemoryTaxStore, TaxStore};
use tax_workflow::{CommitOutcome, TaxpayerWizard, WizardConfig, WizardFactory};
use tracing_subscriber::EnvFilter;

/// Menú interactivo que recorre el asistente de datos del contribuyente
/// sobre un almacén en memoria.
///
/// Opciones soportadas:
/// 1) Ver paso actual y campos activos
/// 2) Editar un campo de texto
/// 3) Cambiar una casilla
/// 4) Enviar el paso
/// 5) Volver al paso anterior
/// 6) Ver el almacén (JSON)
/// 7) Salir
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .with_writer(io::stderr)
                             .try_init()
                             .map_err(|e| anyhow::anyhow!("{}", e))?;

    let config = WizardConfig::from_env().context("leyendo configuración")?;
    log::info!("asistente con pasos {:?}", config.steps);
    let store: Arc<dyn TaxStore> = Arc::new(InMemoryTaxStore::new());
    let mut wizard = WizardFactory::create(&config, store.clone())?;

    loop {
        println!("\n== Taxflow: {} ==", wizard.current_kind().title());
        println!("1) Ver paso actual y campos activos");
        println!("2) Editar campo de texto");
        println!("3) Cambiar casilla");
        println!("4) Enviar paso");
        println!("5) Volver al paso anterior");
        println!("6) Ver almacén (JSON)");
        println!("7) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        if io::stdin().read_line(&mut choice)? == 0 {
            break;
        }
        match choice.trim() {
            "1" => show_step(&wizard),
            "2" => {
                let key = prompt("Clave del campo (ej: address.zip): ")?;
                let value = prompt("Valor: ")?;
                if let Err(e) = wizard.controller_mut().set_text(key.trim(), value.trim_end_matches(['\r', '\n'])) {
                    eprintln!("Error editando campo: {}", e);
                }
            }
            "3" => {
                let key = prompt("Casilla (isForeignCountry, isTaxpayerDependent): ")?;
                let key = key.trim();
                let current = wizard.controller().draft().flag(key);
                match wizard.controller_mut().set_flag(key, !current) {
                    Ok(()) => println!("{} = {}", key, !current),
                    Err(e) => eprintln!("Error cambiando casilla: {}", e),
                }
            }
            "4" => match wizard.submit() {
                Ok(CommitOutcome::Committed(receipt)) => {
                    println!("Paso confirmado: {} (revisión {})", receipt.id, receipt.revision);
                    if wizard.is_completed() {
                        println!("Asistente completado.");
                    }
                }
                Ok(CommitOutcome::Rejected(result)) => {
                    println!("Hay {} campos con errores:", result.error_count());
                    for (key, err) in result.errors() {
                        println!("  {}: {}", key, err.message);
                    }
                }
                Err(e) => eprintln!("Error enviando paso: {}", e),
            },
            "5" => {
                if let Err(e) = wizard.back() {
                    eprintln!("Error volviendo: {}", e);
                }
            }
            "6" => {
                let state = store.snapshot()?;
                println!("{}", serde_json::to_string_pretty(&*state)?);
            }
            "7" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

fn show_step(wizard: &TaxpayerWizard) {
    let nav = wizard.nav_affordances();
    println!("Paso {} de {}", nav.position + 1, nav.total);
    let ctl = wizard.controller();
    let draft = ctl.draft();
    println!("CAMPO                    | REQ | VALOR                | ESTADO");
    println!("--------------------------------------------------------------------");
    for field in ctl.active_schema().iter() {
        let value = match draft.get(&field.key) {
            Some(FieldValue::Flag(b)) => b.to_string(),
            Some(FieldValue::Text(s)) => s.clone(),
            None => "-".into(),
        };
        let status = match ctl.last_result().and_then(|r| r.status(&field.key)) {
            Some(FieldStatus::Error(err)) => err.message.clone(),
            Some(FieldStatus::Ok) => "ok".into(),
            None => String::new(),
        };
        let req = if field.is_required(draft) { "*" } else { "" };
        println!("{:<24} | {:<3} | {:<20} | {}", field.key, req, value, status);
    }
    let prior = nav.prior_step_controls;
    if let (Some(prev), true) = (prior.previous, prior.can_retreat) {
        println!("Anterior: {}", prev.title());
    }
    if let Some(next) = nav.next {
        println!("Siguiente: {}", next.title());
    }
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}
