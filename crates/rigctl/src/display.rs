//! Terminal rendering for compatibility reports.

use owo_colors::OwoColorize;
use rigcheck::{
    advisory, BadgeColor, CheckResult, CompatibilityReport, PartsSelection, ScoreBadge,
};

/// Print the full human-readable report
pub fn print_report(parts: &PartsSelection, report: &CompatibilityReport) {
    print_badge(report.score);
    println!();

    print_selection(parts);
    println!();

    println!("{}", "Checks".bold());
    print_check_line("CPU / motherboard socket", &report.checks.cpu_motherboard);
    print_check_line("RAM / motherboard memory", &report.checks.ram_motherboard);
    print_check_line("Power budget", &report.checks.psu_wattage);
    print_check_line("Board / case fit", &report.checks.board_case);
    println!();

    print_power_budget(report);

    if !report.issues.is_empty() {
        println!();
        println!("{}", "Issues".bold());
        for issue in &report.issues {
            println!("  {} {}", "✗".red(), issue.message);
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("{}", "Warnings".bold());
        for warning in &report.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    let advice = advisory::suggestions(report);
    if !advice.is_empty() {
        println!();
        println!("{}", "Suggestions".bold());
        for line in &advice {
            println!("  - {line}");
        }
    }
}

/// Print the headline badge for a score
pub fn print_badge(score: u8) {
    let badge = advisory::classify_score(score);
    let headline = format!("{} {} ({}/100)", badge.icon, badge.label, score);
    println!("{}", paint(&headline, &badge));
}

fn paint(text: &str, badge: &ScoreBadge) -> String {
    match badge.color {
        BadgeColor::Green => text.green().bold().to_string(),
        BadgeColor::Yellow => text.yellow().bold().to_string(),
        BadgeColor::Orange => text.truecolor(255, 165, 0).bold().to_string(),
        BadgeColor::Red => text.red().bold().to_string(),
    }
}

fn print_selection(parts: &PartsSelection) {
    println!("{}", "Selected parts".bold());
    let categories = parts.selected_categories();
    if categories.is_empty() {
        println!("  (none)");
        return;
    }
    for category in categories {
        let name = match category {
            rigcheck::Category::Cpu => parts.cpu.as_ref().map(|c| c.name.as_str()),
            rigcheck::Category::Gpu => parts.gpu.as_ref().map(|c| c.name.as_str()),
            rigcheck::Category::Ram => parts.ram.as_ref().map(|c| c.name.as_str()),
            rigcheck::Category::Motherboard => {
                parts.motherboard.as_ref().map(|c| c.name.as_str())
            }
            rigcheck::Category::Storage => parts.storage.as_ref().map(|c| c.name.as_str()),
            rigcheck::Category::Psu => parts.psu.as_ref().map(|c| c.name.as_str()),
            rigcheck::Category::Case => parts.case.as_ref().map(|c| c.name.as_str()),
        };
        println!("  {:12} {}", category.as_str(), name.unwrap_or("?"));
    }
}

fn print_check_line(label: &str, result: &CheckResult) {
    let status = if result.compatible {
        "OK".green().to_string()
    } else {
        "FAIL".red().to_string()
    };
    println!("  {label:26} {status}");
}

/// Print estimated draw, headroom target and PSU rating
pub fn print_power_budget(report: &CompatibilityReport) {
    println!("{}", "Power budget".bold());
    println!("  estimated draw   {}W", report.power.total_wattage);
    println!("  recommended PSU  {}W", report.power.recommended_wattage);
    println!("  selected PSU     {}W", report.power.psu_wattage);
}
