//! Text line chart of the recorded cost history.

const HEIGHT: usize = 10;

/// One column per recorded cost (x = iteration index, per fives), `HEIGHT`
/// rows spanning the finite min/max of the series. Non-finite costs are
/// drawn as `?` on the bottom row.
pub fn render_cost_chart(costs: &[f64], learning_rate: f64) -> String {
    let mut out = format!("learning rate = {learning_rate}\n");

    let finite: Vec<f64> = costs.iter().copied().filter(|c| c.is_finite()).collect();
    if costs.is_empty() {
        out.push_str("(no cost history recorded)\n");
        return out;
    }

    let (lo, hi) = finite.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
        (lo.min(c), hi.max(c))
    });
    let span = if hi > lo { hi - lo } else { 1.0 };

    // Row index of each point, 0 = top.
    let rows: Vec<Option<usize>> = costs.iter()
        .map(|&c| {
            c.is_finite().then(|| {
                let level = ((c - lo) / span * (HEIGHT - 1) as f64).round() as usize;
                HEIGHT - 1 - level.min(HEIGHT - 1)
            })
        })
        .collect();

    let label_width = 12;
    for r in 0..HEIGHT {
        let label = if r == 0 && !finite.is_empty() {
            format!("{hi:>label_width$.6}")
        } else if r == HEIGHT - 1 && !finite.is_empty() {
            format!("{lo:>label_width$.6}")
        } else {
            " ".repeat(label_width)
        };
        let line: String = rows.iter()
            .map(|row| match row {
                Some(row) if *row == r => '*',
                None if r == HEIGHT - 1 => '?',
                _ => ' ',
            })
            .collect();
        out.push_str(&format!("{label} |{}\n", line.trim_end()));
    }
    out.push_str(&format!("{} +{}\n", " ".repeat(label_width), "-".repeat(costs.len())));
    out.push_str(&format!("{}  cost vs iterations (per fives)\n", " ".repeat(label_width)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decreasing_costs_run_top_left_to_bottom_right() {
        let chart = render_cost_chart(&[4.0, 2.0, 1.0], 0.0001);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "learning rate = 0.0001");
        assert!(lines[1].ends_with("|*"));
        assert!(lines[HEIGHT].ends_with("|  *"));
        assert!(lines[1].contains("4.000000"));
        assert!(lines[HEIGHT].contains("1.000000"));
    }

    #[test]
    fn empty_history_is_noted() {
        assert!(render_cost_chart(&[], 0.1).contains("no cost history"));
    }

    #[test]
    fn flat_and_divergent_series_still_render() {
        let chart = render_cost_chart(&[2.0, f64::NAN, 2.0], 0.1);
        assert!(chart.lines().any(|l| l.ends_with("|*?*")));
    }
}
