/*!
Helpers d'assertion pour les tests

- Initialisation du logging (idempotente)
- Vérification du format `Time: * | CPU Usage: *.??% | Memory Usage: *.??%`
*/

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

/// Init logging pour tests, sans erreur si déjà fait
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Vérifie qu'une ligne respecte le format du fichier de télémétrie
pub fn assert_line_format(line: &str) -> Result<()> {
    let rest = line.strip_prefix("Time: ").context("line must start with `Time: `")?;
    let (timestamp, rest) = rest.split_once(" | CPU Usage: ").context("missing CPU field")?;
    let (cpu, memory) = rest.split_once("% | Memory Usage: ").context("missing memory field")?;
    let memory = memory.strip_suffix('%').context("memory must end with `%`")?;

    if timestamp.trim().is_empty() {
        bail!("empty timestamp in {line:?}");
    }
    check_two_decimals("cpu", cpu)?;
    check_two_decimals("memory", memory)?;
    Ok(())
}

fn check_two_decimals(name: &str, value: &str) -> Result<()> {
    let (int, frac) = value.split_once('.').with_context(|| format!("{name} has no decimal point: {value}"))?;
    if int.is_empty() || !int.chars().all(|c| c.is_ascii_digit()) {
        bail!("{name} integer part invalid: {value}");
    }
    if frac.len() != 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        bail!("{name} must have exactly two decimals: {value}");
    }
    Ok(())
}
