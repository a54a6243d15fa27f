use anyhow::Result;

use crate::platform::{Availability, Target, detect_host};

/// Print every known platform and whether a binary is shipped for it.
pub fn platforms() -> Result<()> {
    print!("{}", format_platforms());
    println!("Host: {}", detect_host());
    Ok(())
}

pub(crate) fn format_platforms() -> String {
    let mut out = String::new();
    for target in Target::ALL {
        let status = match target.availability() {
            Availability::Available => "available".to_string(),
            Availability::Planned { reason } => format!("planned ({})", reason),
        };
        out.push_str(&format!(
            "{:<14} {:<31} {:<27} {}\n",
            target.to_string(),
            target.rust_triple(),
            target.descriptor().relative_path(),
            status
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_platforms_lists_every_target() {
        let text = format_platforms();
        assert_eq!(text.lines().count(), Target::ALL.len());

        let first = text.lines().next().unwrap();
        assert!(first.starts_with("win32-x64"));
        assert!(first.contains("x86_64-pc-windows-msvc"));
        assert!(first.contains("windows/concurrently.exe"));
        assert!(first.ends_with("available"));

        assert!(text.contains("planned (cross-compilation not set up)"));
    }
}
