use crate::cli::LangsArgs;
use crate::style;
use colored::{ColoredString, Colorize};

use super::{CommandContext, report_api_error};

const BAR_WIDTH: usize = 30;

pub fn cmd_langs(args: LangsArgs, ctx: &CommandContext) -> i32 {
    let rt = super::runtime();

    let languages = match rt.block_on(
        ctx.client
            .repository_languages(&args.repo.owner, &args.repo.repo),
    ) {
        Ok(languages) => languages,
        Err(e) => {
            report_api_error(&e);
            return 1;
        }
    };

    if languages.is_empty() {
        style::warning("no language data for this repository");
        return 0;
    }

    let total: u64 = languages.values().sum();
    let mut ranked: Vec<(&String, &u64)> = languages.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    style::header(&format!("Language distribution for {}", args.repo));
    for (i, (language, bytes)) in ranked.iter().enumerate() {
        let share = **bytes as f64 / total as f64;
        let filled = ((share * BAR_WIDTH as f64).round() as usize).max(1);
        println!(
            "{:<14} {} {:>5.1}%  {}",
            language,
            colorize("█".repeat(filled), i),
            share * 100.0,
            format_bytes(**bytes).dimmed()
        );
    }
    println!();
    println!("{}", style::metric("total", format_bytes(total)));
    0
}

fn colorize(bar: String, index: usize) -> ColoredString {
    match index % 6 {
        0 => bar.blue(),
        1 => bar.cyan(),
        2 => bar.magenta(),
        3 => bar.green(),
        4 => bar.yellow(),
        _ => bar.red(),
    }
}

/// 1024-based byte formatting with trailing zeros trimmed (1.50 MB -> 1.5 MB).
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (((bytes as f64).ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn bytes_format_with_binary_units() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(2_621_440), "2.5 MB");
    }
}
