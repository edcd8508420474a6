use costboard_app::{ChartHandle, ChartRenderer};

const BAR_WIDTH: usize = 40;

/// Draws bar charts as terminal text. Output is append-only, so the
/// handle has nothing to undo when destroyed.
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }
}

struct TermChart;

impl ChartHandle for TermChart {
    fn destroy(self: Box<Self>) {}
}

impl ChartRenderer for TermRenderer {
    fn render(&mut self, labels: &[String], values: &[f64], title: &str) -> Box<dyn ChartHandle> {
        println!("\n{title}");
        if labels.is_empty() {
            println!("  (no data)");
            return Box::new(TermChart);
        }

        let max_value = values.iter().cloned().fold(0.0_f64, f64::max);
        let label_width = labels.iter().map(|label| label.len()).max().unwrap_or(0);
        for (label, value) in labels.iter().zip(values) {
            let bar = "#".repeat(bar_len(*value, max_value));
            println!("  {label:>label_width$} | {bar} {value:.2}");
        }
        Box::new(TermChart)
    }
}

fn bar_len(value: f64, max_value: f64) -> usize {
    if max_value <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max_value) * BAR_WIDTH as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_len_scales_to_max() {
        assert_eq!(bar_len(100.0, 100.0), BAR_WIDTH);
        assert_eq!(bar_len(50.0, 100.0), BAR_WIDTH / 2);
        assert_eq!(bar_len(0.0, 100.0), 0);
    }

    #[test]
    fn bar_len_handles_all_zero_series() {
        assert_eq!(bar_len(0.0, 0.0), 0);
    }
}
