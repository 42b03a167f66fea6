use helix_analysis::SequenceReport;

pub fn print_report(report: &SequenceReport) {
    println!("\nSequence Analysis");
    println!("=================");
    println!("Sequence:        {}", report.sequence);
    println!("Length:          {} nt", report.length);
    println!();
    println!("GC content:      {:.2}%", report.gc_content * 100.0);
    println!(
        "GC balanced:     {} (target {:.2}% - {:.2}%)",
        report.gc_balanced,
        report.gc_target.0 * 100.0,
        report.gc_target.1 * 100.0
    );
    println!();
    println!(
        "Max runlength:   {} (limit {})",
        report.max_runlength, report.runlength_limit
    );
    println!("Runlength ok:    {}", report.runlength_ok);
    println!();
    println!("Base counts:");
    let total = report.length.max(1);
    for (base, count) in [
        ('A', report.counts.a),
        ('T', report.counts.t),
        ('C', report.counts.c),
        ('G', report.counts.g),
    ] {
        println!(
            "  {base}: {count:4} ({:5.1}%)",
            count as f64 / total as f64 * 100.0
        );
    }
    if !report.runs.is_empty() {
        println!();
        println!("Homopolymer runs:");
        for run in &report.runs {
            let base = run
                .nucleotide()
                .map(|n| n.to_char())
                .unwrap_or('?');
            println!("  {base} x {} at position {}", run.length, run.start);
        }
    }
}
