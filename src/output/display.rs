//! Display functions for command results

use super::formatters::{PatternStyle, create_progress_bar, score_line};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print an automated game round by round
pub fn print_solve_result(result: &SolveResult, style: PatternStyle, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Playing against the judge".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            round.guess.text().to_uppercase(),
            style.render(&round.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ {}", score_line(result.rounds.len(), result.max_rounds))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Out of guesses after {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print how a word splits the candidates
pub fn print_analysis_result(result: &AnalysisResult, style: PatternStyle) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SPLIT ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} candidates: {} groups",
        result.total_candidates, result.group_count
    );
    println!(
        "   Judge answers: {} ({} remain)",
        style.render(&result.response).bright_yellow(),
        result.remaining
    );

    println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
    for group in &result.groups {
        let bar = create_progress_bar(group.size as f64, result.total_candidates as f64, 30);
        let more = if group.size > group.sample.len() { ", …" } else { "" };
        println!(
            "   {} [{}] {:4}  {}{}",
            style.render(&group.pattern),
            bar.green(),
            group.size,
            group.sample.join(", ").bright_black(),
            more
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Games won:        {}", result.won);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    if let Some((opener, rounds)) = &result.best_opener {
        println!(
            "   Best opener:      {} ({rounds} rounds)",
            opener.to_uppercase().bright_white().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {rounds:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
