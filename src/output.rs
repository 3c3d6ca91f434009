use crate::facts::{FactResult, FactValue};

pub fn exit_code(results: &[FactResult]) -> i32 {
    if results.iter().any(FactResult::is_failed) {
        2
    } else {
        0
    }
}

pub fn print_results(results: &[FactResult]) {
    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                             Host Facts Report                                ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    for result in results {
        let icon = match result.value {
            FactValue::Resolved(_) => "✓",
            FactValue::Undefined => "-",
            FactValue::Failed(_) => "✗",
        };
        println!(
            "{} {:<28} {:<40} (binary: {})",
            icon,
            result.fact_name,
            result.value.to_string(),
            result.binary
        );
    }

    let resolved = results
        .iter()
        .filter(|r| matches!(r.value, FactValue::Resolved(_)))
        .count();
    let failed = results.iter().filter(|r| r.is_failed()).count();

    println!("\n════════════════════════════════════════════════════════════════════════════════");
    println!(
        "{} resolved, {} undefined, {} failed",
        resolved,
        results.len() - resolved - failed,
        failed
    );
    println!("════════════════════════════════════════════════════════════════════════════════\n");
}
