use std::collections::VecDeque;

use log::*;

use crate::commands::Command;
use crate::models::canvas::{Canvas, Coordinate};

pub type Stroke = Vec<Command>;

pub struct StrokeLog {
    in_progress: Stroke,
    undo_stack: VecDeque<Stroke>,
    redo_stack: Vec<Stroke>,
    history_limit: Option<usize>,
    cursor: Option<Coordinate>,
}

impl StrokeLog {

    pub fn new() -> Self {
        StrokeLog {
            in_progress: Vec::new(),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            history_limit: None,
            cursor: None,
        }
    }

    pub fn with_history_limit(limit: usize) -> Self {
        StrokeLog {
            history_limit: Some(limit),
            ..Self::new()
        }
    }

    // a failed command keeps its effect on the canvas but is not recorded
    pub fn execute(&mut self, mut command: Command, canvas: &mut Canvas) -> bool {
        if !command.execute(canvas) {
            debug!("{} postcondition failed, not recording it", command.name());
            return false;
        }

        self.in_progress.push(command);
        self.redo_stack.clear();
        true
    }

    pub fn execute_as_stroke(&mut self, mut command: Command, canvas: &mut Canvas) -> bool {
        if !command.execute(canvas) {
            debug!("{} postcondition failed, not recording it", command.name());
            return false;
        }

        self.push_undo(vec![command]);
        self.redo_stack.clear();
        true
    }

    pub fn commit_stroke(&mut self) -> bool {
        if self.in_progress.is_empty() {
            return false;
        }

        let stroke = std::mem::replace(&mut self.in_progress, Vec::new());
        self.push_undo(stroke);
        true
    }

    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let mut stroke = match self.undo_stack.pop_back() {
            Some(v) => v,
            None => return false,
        };

        for command in stroke.iter_mut().rev() {
            if let Some(position) = command.position() {
                self.cursor = Some(position);
            }
            command.undo(canvas);
        }

        self.redo_stack.push(stroke);
        true
    }

    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let mut stroke = match self.redo_stack.pop() {
            Some(v) => v,
            None => return false,
        };

        for command in stroke.iter_mut() {
            if let Some(position) = command.position() {
                self.cursor = Some(position);
            }
            command.execute(canvas);
        }

        self.push_undo(stroke);
        true
    }

    pub fn cursor(&self) -> Option<Coordinate> {
        self.cursor
    }

    pub fn in_progress(&self) -> &[Command] {
        &self.in_progress
    }

    pub fn has_stroke_in_progress(&self) -> bool {
        !self.in_progress.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn next_undo_len(&self) -> Option<usize> {
        self.undo_stack.back().map(|stroke| stroke.len())
    }

    pub fn next_redo_len(&self) -> Option<usize> {
        self.redo_stack.last().map(|stroke| stroke.len())
    }

    fn push_undo(&mut self, stroke: Stroke) {
        self.undo_stack.push_back(stroke);

        if let Some(limit) = self.history_limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
                debug!("undo history is over {} strokes, dropped the oldest one", limit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::pixel::Pixel;
    use crate::models::snapshot::Snapshot;
    use crate::paint::strategy::{PaintStrategy, SquareBrush};

    fn square() -> Rc<dyn PaintStrategy> {
        Rc::new(SquareBrush::new())
    }

    fn draw(x: i32, y: i32, radius: i32, color: Pixel) -> Command {
        Command::draw(Coordinate::new(x, y), radius, color, square())
    }

    #[test]
    fn test_undo_stroke_restores_canvas() {
        let mut canvas = Canvas::new(100, 100);
        canvas.set(Coordinate::new(50, 50), Pixel::green());
        let before = canvas.clone();
        let mut log = StrokeLog::new();

        for (x, y) in [(10, 10), (11, 10), (12, 11), (50, 50), (11, 10)].iter() {
            assert!(log.execute(draw(*x, *y, 3, Pixel::black()), &mut canvas));
        }
        assert!(log.commit_stroke());
        assert_eq!(log.undo_depth(), 1);
        assert_eq!(log.next_undo_len(), Some(5));

        assert!(log.undo(&mut canvas));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_undo_draw_scenario() {
        let mut canvas = Canvas::new(1000, 850);
        let mut log = StrokeLog::new();

        log.execute(draw(150, 200, 2, Pixel::black()), &mut canvas);
        log.commit_stroke();
        log.undo(&mut canvas);

        for x in 148..152 {
            for y in 198..202 {
                assert_eq!(canvas.get(Coordinate::new(x, y)), Some(Pixel::white()));
            }
        }
        assert_eq!(log.cursor(), Some(Coordinate::new(150, 200)));
    }

    #[test]
    fn test_undo_fill_scenario() {
        let mut canvas = Canvas::new(1000, 850);
        let mut log = StrokeLog::new();

        log.execute(draw(150, 200, 1, Pixel::red()), &mut canvas);
        log.execute_as_stroke(Command::fill(Pixel::blue()), &mut canvas);
        assert_eq!(canvas.get(Coordinate::new(150, 200)), Some(Pixel::blue()));

        assert!(log.undo(&mut canvas));
        assert_eq!(canvas.get(Coordinate::new(150, 200)), Some(Pixel::red()));
        assert_eq!(canvas.get(Coordinate::new(200, 200)), Some(Pixel::white()));

        // the draw is still waiting for its commit
        assert_eq!(log.in_progress().len(), 1);
        assert_eq!(log.undo_depth(), 0);
    }

    #[test]
    fn test_new_command_clears_redo() {
        let mut canvas = Canvas::new(50, 50);
        let mut log = StrokeLog::new();

        log.execute(draw(5, 5, 1, Pixel::red()), &mut canvas);
        log.execute(draw(6, 6, 1, Pixel::red()), &mut canvas);
        log.commit_stroke();
        log.undo(&mut canvas);

        assert_eq!(log.redo_depth(), 1);
        assert_eq!(log.next_redo_len(), Some(2));

        log.execute(draw(20, 20, 1, Pixel::blue()), &mut canvas);
        assert_eq!(log.redo_depth(), 0);
        assert!(!log.redo(&mut canvas));
    }

    #[test]
    fn test_redo_replays_in_order() {
        let mut canvas = Canvas::new(50, 50);
        let mut log = StrokeLog::new();

        log.execute(draw(10, 10, 2, Pixel::red()), &mut canvas);
        log.execute(draw(11, 11, 2, Pixel::blue()), &mut canvas);
        log.commit_stroke();
        let painted = canvas.clone();

        log.undo(&mut canvas);
        assert_eq!(log.cursor(), Some(Coordinate::new(10, 10)));
        assert!(log.redo(&mut canvas));

        assert_eq!(canvas, painted);
        assert_eq!(canvas.get(Coordinate::new(10, 10)), Some(Pixel::blue()));
        assert_eq!(log.cursor(), Some(Coordinate::new(11, 11)));
        assert_eq!(log.undo_depth(), 1);
        assert_eq!(log.redo_depth(), 0);
    }

    #[test]
    fn test_overlapping_strokes_peel_back_in_reverse() {
        let mut canvas = Canvas::new(50, 50);
        let mut log = StrokeLog::new();

        log.execute(draw(10, 10, 3, Pixel::red()), &mut canvas);
        log.commit_stroke();
        let after_first = canvas.clone();

        log.execute(draw(11, 11, 3, Pixel::blue()), &mut canvas);
        log.execute(draw(12, 12, 3, Pixel::green()), &mut canvas);
        log.commit_stroke();

        log.undo(&mut canvas);
        assert_eq!(canvas, after_first);

        log.undo(&mut canvas);
        assert_eq!(canvas, Canvas::new(50, 50));
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut canvas = Canvas::new(10, 10);
        let mut log = StrokeLog::new();

        assert!(!log.undo(&mut canvas));
        assert!(!log.redo(&mut canvas));
        assert!(!log.commit_stroke());
        assert_eq!(log.undo_depth(), 0);
        assert_eq!(log.cursor(), None);
    }

    #[test]
    fn test_failed_command_is_not_recorded() {
        let mut canvas = Canvas::new(10, 10);
        let mut log = StrokeLog::new();
        let noop = Command::draw(
            Coordinate::new(5, 5),
            1,
            Pixel::red(),
            Rc::new(|_: &mut Canvas, _: Pixel, _: i32, _: Coordinate| Snapshot::new()),
        );

        assert!(!log.execute(noop, &mut canvas));
        assert!(!log.has_stroke_in_progress());
    }

    #[test]
    fn test_strategy_swap_keeps_old_commands() {
        let mut canvas = Canvas::new(30, 30);
        let mut log = StrokeLog::new();
        let mut strategy: Rc<dyn PaintStrategy> = square();

        log.execute(Command::draw(Coordinate::new(5, 5), 2, Pixel::red(), strategy.clone()), &mut canvas);
        log.commit_stroke();

        strategy = Rc::new(|canvas: &mut Canvas, color: Pixel, _: i32, center: Coordinate| {
            let mut snapshot = Snapshot::new();
            if let Some(prior) = canvas.get(center) {
                snapshot.record(center, prior);
                canvas.set(center, color);
            }
            snapshot
        });
        log.execute(Command::draw(Coordinate::new(20, 20), 2, Pixel::blue(), strategy.clone()), &mut canvas);
        log.commit_stroke();
        assert_eq!(canvas.get(Coordinate::new(19, 19)), Some(Pixel::white()));

        log.undo(&mut canvas);
        log.undo(&mut canvas);
        log.redo(&mut canvas);

        // the first stroke still paints its full square on redo
        for x in 3..7 {
            for y in 3..7 {
                assert_eq!(canvas.get(Coordinate::new(x, y)), Some(Pixel::red()));
            }
        }
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut canvas = Canvas::new(30, 30);
        let mut log = StrokeLog::with_history_limit(2);

        for i in 0..3 {
            log.execute(draw(5 + i * 5, 5, 1, Pixel::red()), &mut canvas);
            log.commit_stroke();
        }

        assert_eq!(log.undo_depth(), 2);
        log.undo(&mut canvas);
        log.undo(&mut canvas);
        assert!(!log.undo(&mut canvas));
        assert_eq!(canvas.get(Coordinate::new(5, 5)), Some(Pixel::red()));
        assert_eq!(canvas.get(Coordinate::new(10, 5)), Some(Pixel::white()));
    }
}
