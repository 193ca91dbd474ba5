//! # Diagrama de Gantt
//! src/report/gantt.rs
//!
//! Dibuja la línea de tiempo de la CPU en texto:
//!
//! ```text
//! |  P1  |  idle  |  P2  |
//! 0      2        5      7
//! ```

use crate::scheduler::TimelineSegment;

/// Renderiza los tramos como dos líneas: celdas y marcas de tiempo
pub fn render(timeline: &[TimelineSegment]) -> String {
    let Some(last) = timeline.last() else {
        return String::new();
    };

    let mut bars = String::from("|");
    let mut ticks = String::new();

    for segment in timeline {
        let label = match segment {
            TimelineSegment::Idle { .. } => "idle".to_string(),
            TimelineSegment::Run { id, .. } => format!("P{}", id),
        };
        let width = label.len().max(segment.end().to_string().len()) + 4;

        bars.push_str(&format!("{:^width$}|", label, width = width));
        ticks.push_str(&format!("{:<width$}", segment.start(), width = width + 1));
    }
    ticks.push_str(&last.end().to_string());

    format!("{}\n{}\n", bars, ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_idle() {
        let timeline = [
            TimelineSegment::Run { id: 1, start: 0, end: 2 },
            TimelineSegment::Idle { start: 2, end: 5 },
            TimelineSegment::Run { id: 2, start: 5, end: 7 },
        ];
        assert_eq!(
            render(&timeline),
            "|  P1  |  idle  |  P2  |\n0      2        5      7\n"
        );
    }

    #[test]
    fn test_ticks_align_with_bars() {
        let timeline = [
            TimelineSegment::Run { id: 10, start: 0, end: 120 },
            TimelineSegment::Run { id: 11, start: 120, end: 121 },
        ];
        let text = render(&timeline);
        let mut lines = text.lines();
        let bars = lines.next().unwrap();
        let ticks = lines.next().unwrap();

        let bar_positions: Vec<_> = bars.match_indices('|').map(|(i, _)| i).collect();
        for (position, value) in bar_positions.iter().zip(["0", "120", "121"]) {
            assert_eq!(&ticks[*position..*position + value.len()], value);
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
