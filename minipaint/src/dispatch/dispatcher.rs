use std::rc::Rc;

use minipaint_core::commands::Command;
use minipaint_core::history::stroke_log::StrokeLog;
use minipaint_core::models::canvas::{Canvas, Coordinate};
use minipaint_core::models::pixel::Pixel;
use minipaint_core::paint::strategy::PaintStrategy;

use crate::dispatch::input::{Brush, Frontend, InputEvent, KeyAction, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};
use crate::protocol::message::Packet;
use crate::protocol::socket::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Dispatcher<T: Transport> {
    canvas: Canvas,
    log: StrokeLog,
    transport: T,
    brush: Brush,
    background: Pixel,
    last_pointer: Option<Coordinate>,
    packets_per_tick: usize,
}

impl<T: Transport> Dispatcher<T> {

    pub fn new(canvas: Canvas, log: StrokeLog, transport: T) -> Self {
        Dispatcher {
            canvas,
            log,
            transport,
            brush: Brush::new(),
            background: Pixel::white(),
            last_pointer: None,
            packets_per_tick: 1,
        }
    }

    pub fn with_packets_per_tick(mut self, packets_per_tick: usize) -> Self {
        self.packets_per_tick = packets_per_tick.max(1);
        self
    }

    pub fn with_background(mut self, background: Pixel) -> Self {
        self.background = background;
        self
    }

    pub fn interpret(&mut self, packet: &Packet) -> Flow {
        debug!("interpreting {:?}", packet);

        match *packet {
            Packet::Handshake => {},
            Packet::DrawPoint { x, y, color, radius } => {
                let command = Command::draw(Coordinate::new(x, y), radius, color, self.brush.strategy.clone());
                if !self.log.execute(command, &mut self.canvas) {
                    debug!("draw at ({}, {}) did not leave its color at the center", x, y);
                }
            },
            Packet::EndStroke => {
                self.log.commit_stroke();
            },
            Packet::Undo => {
                self.log.undo(&mut self.canvas);
            },
            Packet::Redo => {
                self.log.redo(&mut self.canvas);
            },
            Packet::Fill { color } => {
                if !self.log.execute_as_stroke(Command::fill(color), &mut self.canvas) {
                    debug!("fill did not leave every pixel with its color");
                }
            },
            Packet::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    pub fn apply_local(&mut self, packet: Packet) -> Flow {
        let flow = self.interpret(&packet);

        if let Err(err) = self.transport.send(&packet) {
            warn!("failed to send {:?}: {}", packet, err);
        }

        if flow == Flow::Quit {
            self.transport.close();
        }

        flow
    }

    // a remote quit only means that peer left
    pub fn apply_remote(&mut self, packet: Packet) {
        if self.interpret(&packet) == Flow::Quit {
            info!("a peer has left the session");
        }
    }

    pub fn poll_remote(&mut self) -> usize {
        let mut applied = 0;

        for _ in 0..self.packets_per_tick {
            match self.transport.recv() {
                Ok(Some(packet)) => {
                    self.apply_remote(packet);
                    applied += 1;
                },
                Ok(None) => break,
                Err(err) => warn!("dropping inbound datagram: {}", err),
            }
        }

        applied
    }

    pub fn translate_pointer(&mut self, position: Coordinate) -> Option<Packet> {
        if self.last_pointer == Some(position) || !self.canvas.contains(position) {
            return None;
        }

        self.last_pointer = Some(position);
        Some(Packet::draw_point(position, self.brush.color, self.brush.radius))
    }

    pub fn translate(&mut self, event: InputEvent) -> Option<Packet> {
        match event {
            InputEvent::PointerReleased => {
                self.last_pointer = None;
                if self.log.has_stroke_in_progress() {
                    Some(Packet::EndStroke)
                } else {
                    None
                }
            },
            InputEvent::Key(action) => match action {
                KeyAction::Undo => Some(Packet::Undo),
                KeyAction::Redo => Some(Packet::Redo),
                KeyAction::Fill => Some(Packet::Fill { color: self.brush.color }),
                KeyAction::Quit => Some(Packet::Quit),
                KeyAction::SelectColor(color) => {
                    self.brush.color = color;
                    None
                },
                KeyAction::Eraser => {
                    self.brush.color = self.background;
                    None
                },
                KeyAction::SetRadius(radius) => {
                    self.set_radius(radius);
                    None
                },
                KeyAction::GrowRadius => {
                    self.brush.grow();
                    None
                },
                KeyAction::ShrinkRadius => {
                    self.brush.shrink();
                    None
                },
            },
        }
    }

    pub fn tick<F: Frontend>(&mut self, frontend: &mut F) -> Flow {
        self.poll_remote();

        if frontend.is_pointer_down() {
            if let Some(position) = frontend.pointer_position() {
                if let Some(packet) = self.translate_pointer(position) {
                    self.apply_local(packet);
                }
            }
        }

        for event in frontend.poll_events() {
            if let Some(packet) = self.translate(event) {
                if self.apply_local(packet) == Flow::Quit {
                    return Flow::Quit;
                }
            }
        }

        frontend.present(&self.canvas);
        Flow::Continue
    }

    pub fn renderable_snapshot(&self) -> &Canvas {
        &self.canvas
    }

    pub fn stroke_log(&self) -> &StrokeLog {
        &self.log
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn color(&self) -> Pixel {
        self.brush.color
    }

    pub fn set_color(&mut self, color: Pixel) {
        self.brush.color = color;
    }

    pub fn radius(&self) -> i32 {
        self.brush.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.brush.radius = radius.max(MIN_BRUSH_RADIUS).min(MAX_BRUSH_RADIUS);
    }

    pub fn set_paint_strategy(&mut self, strategy: Rc<dyn PaintStrategy>) {
        self.brush.strategy = strategy;
    }
}

pub fn run<T: Transport, F: Frontend>(dispatcher: &mut Dispatcher<T>, frontend: &mut F) {
    info!("starting the app");

    while frontend.is_open() {
        if dispatcher.tick(frontend) == Flow::Quit {
            info!("quit requested");
            return;
        }
    }

    info!("window closed");
    dispatcher.apply_local(Packet::Quit);
}
