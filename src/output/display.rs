//! Display functions for command results

use super::formatters::{format_options, letter_ruler, ratio_bar, spaced};
use crate::commands::{CheckResult, ExportResult, Game, GraphStats, PathResult, WordReport};
use crate::core::Word;
use colored::Colorize;
use std::path::Path;

/// Print the edits available on a word
pub fn print_word_report(report: &WordReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD:".bright_cyan().bold(),
        report.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   {}", spaced(&report.word).bright_white().bold());
    println!("   {}", letter_ruler(report.letters.len()).bright_black());

    println!("\n✂️  {}", "Letters:".bright_cyan().bold());
    for letter in &report.letters {
        let delete = letter
            .delete
            .as_deref()
            .map_or_else(|| "-".bright_black().to_string(), |w| w.green().to_string());
        println!(
            "   {} '{}'  delete: {}",
            (letter.index + 1).to_string().bright_black(),
            letter.letter,
            delete
        );
        if !letter.replacements.is_empty() {
            println!("        replace: {}", format_options(&letter.replacements));
        }
    }

    println!("\n➕ {}", "Inserts:".bright_cyan().bold());
    let mut any = false;
    for gap in report.gaps.iter().filter(|g| !g.inserts.is_empty()) {
        any = true;
        println!(
            "   as letter {}: {}",
            (gap.index + 1).to_string().bright_black(),
            format_options(&gap.inserts)
        );
    }
    if !any {
        println!("   {}", "none".bright_black());
    }

    println!(
        "\n📊 {} changes to {} neighbors",
        report.total_changes.to_string().bright_yellow(),
        report.neighbors.to_string().bright_yellow()
    );
}

/// Print a ladder between two words
pub fn print_path_result(result: &PathResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.from.bright_yellow().bold(),
        result.to.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let Some(steps) = &result.steps else {
        println!("\n{}", "❌ No ladder connects these words".red().bold());
        return;
    };

    for (i, step) in steps.iter().enumerate() {
        match &step.edit {
            Some(edit) => println!(
                "  {}. {:<12} {}",
                i.to_string().bright_black(),
                step.word.bright_white().bold(),
                edit.bright_black()
            ),
            None => println!(
                "  {}. {}",
                i.to_string().bright_black(),
                step.word.bright_white().bold()
            ),
        }
    }

    let edits = result.edits().unwrap_or(0);
    println!(
        "\n{}",
        format!(
            "✅ {edits} {}",
            if edits == 1 { "edit" } else { "edits" }
        )
        .green()
        .bold()
    );
}

/// Print graph statistics
pub fn print_stats(stats: &GraphStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRAPH STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Size:".bright_cyan().bold());
    println!("   Words:            {}", stats.words);
    println!(
        "   Changes:          {}",
        stats.changes.to_string().bright_yellow().bold()
    );
    println!("   Per word:         {:.2}", stats.average_changes());

    println!("\n📈 {}", "By kind:".bright_cyan().bold());
    for (label, count) in [
        ("delete", stats.deletes),
        ("insert", stats.inserts),
        ("replace", stats.replaces),
    ] {
        let pct = if stats.changes == 0 {
            0.0
        } else {
            count as f64 / stats.changes as f64 * 100.0
        };
        println!(
            "   {label:<8} {} {count:6} ({pct:5.1}%)",
            ratio_bar(count, stats.changes, 30).green()
        );
    }

    println!("\n🔗 {}", "Connectivity:".bright_cyan().bold());
    println!("   Components:       {}", stats.components);
    println!("   Largest:          {}", stats.largest_component);
    println!(
        "   Isolated words:   {}",
        stats.isolated.to_string().yellow()
    );
    if let Some((word, neighbors)) = &stats.most_connected {
        println!(
            "   Most connected:   {} ({neighbors} neighbors)",
            word.bright_white().bold()
        );
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
}

/// Print the outcome of validating a wire file
pub fn print_check_result(path: &Path, result: &CheckResult) {
    println!(
        "{} {}: {} words, {} changes",
        "✅".green(),
        path.display().to_string().bright_white().bold(),
        result.words,
        result.changes
    );
}

/// Print where an export went, if it went to a file
pub fn print_export_result(result: &ExportResult) {
    if let Some(path) = &result.path {
        println!(
            "{} wrote {} words ({} bytes) to {}",
            "✅".green(),
            result.words,
            result.bytes,
            path.display().to_string().bright_white().bold()
        );
    }
}

/// Print the current word of a game with its letter numbers
pub fn print_current_word(word: &Word, game: &Game<'_>, moves: usize) {
    println!("────────────────────────────────────────────────────────────");
    match game.target {
        Some(target) => println!(
            "Move {moves}: {} → {}",
            word.value().bright_white().bold(),
            target.value().bright_yellow()
        ),
        None => println!("Move {moves}: {}", word.value().bright_white().bold()),
    }
    println!("────────────────────────────────────────────────────────────");
    println!("\n   {}", spaced(word.value()).bright_white().bold());
    println!("   {}\n", letter_ruler(word.len()).bright_black());
}

/// Celebrate reaching the target
pub fn print_win(game: &Game<'_>, moves: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "          🎉 🎊 ✨  T A R G E T   R E A C H E D !  ✨ 🎊 🎉"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let verdict = match game.par {
        Some(par) if moves <= par => ("🏆 Perfect!", "Shortest possible ladder!"),
        Some(par) if moves <= par + 2 => ("⭐ Great!", "Very close to the best ladder."),
        _ => ("✓ Complete!", "Got there!"),
    };
    println!("\n  {}", verdict.0.bright_yellow().bold());
    println!("  {}", verdict.1.bright_white());
    println!(
        "\n  Reached in {} {}",
        moves.to_string().bright_cyan().bold(),
        if moves == 1 { "edit" } else { "edits" }
    );
    if let Some(par) = game.par {
        println!("  Best possible: {par}");
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}
