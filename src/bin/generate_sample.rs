use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes a small set of related `.param` files into ./sample_data for
/// trying out the comparator: shared values, spreads, and parameters that
/// only some files carry.
fn main() -> Result<()> {
    let dir = Path::new("sample_data");
    fs::create_dir_all(dir).context("creating sample_data directory")?;

    let baseline: Vec<(&str, &str)> = vec![
        ("ACRO_BAL_PITCH", "1.0"),
        ("ACRO_BAL_ROLL", "1.0"),
        ("AHRS_GPS_USE", "1"),
        ("ANGLE_MAX", "4500"),
        ("ARMING_CHECK", "1"),
        ("BATT_CAPACITY", "5200"),
        ("COMPASS_USE", "1"),
        ("RTL_ALT", "1500"),
        ("WPNAV_SPEED", "500"),
    ];

    // copter_a: the baseline as exported.
    write_param_file(dir, "copter_a.param", &baseline)?;

    // copter_b: a retuned copy, plus a parameter the others lack.
    let copter_b = with_overrides(
        &baseline,
        &[("ANGLE_MAX", "3000"), ("RTL_ALT", "2000"), ("WPNAV_SPEED", "650")],
        &[("FENCE_ENABLE", "1")],
    );
    write_param_file(dir, "copter_b.param", &copter_b)?;

    // copter_c: agrees with copter_b on some overrides, diverges on others.
    let copter_c = with_overrides(
        &baseline,
        &[("ANGLE_MAX", "3000"), ("RTL_ALT", "2500"), ("BATT_CAPACITY", "8000")],
        &[("FENCE_ENABLE", "0"), ("TERRAIN_ENABLE", "1")],
    );
    write_param_file(dir, "copter_c.param", &copter_c)?;

    println!("Wrote 3 parameter files to {}", dir.display());
    Ok(())
}

/// Baseline with some values replaced and some parameters appended.
fn with_overrides<'a>(
    baseline: &[(&'a str, &'a str)],
    replace: &[(&'a str, &'a str)],
    append: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let mut out: Vec<(&str, &str)> = baseline
        .iter()
        .map(|&(name, value)| {
            match replace.iter().find(|(n, _)| *n == name) {
                Some(&(_, replacement)) => (name, replacement),
                None => (name, value),
            }
        })
        .collect();
    out.extend_from_slice(append);
    out
}

fn write_param_file(dir: &Path, file_name: &str, entries: &[(&str, &str)]) -> Result<()> {
    let mut content = String::from("# exported parameters\n");
    for (name, value) in entries {
        content.push_str(name);
        content.push(',');
        content.push_str(value);
        content.push('\n');
    }

    let path = dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
