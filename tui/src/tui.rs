//! The text-based user interface.

use crate::cli::Args;
use pancurses::{ColorPair, Input, Window};
use std::thread;
use torlife_lib::Simulation;

struct SimWindow {
    paused: bool,

    window: Window,
    top_bar: Window,
    bottom_bar: Window,
    grid_win: Window,
}

impl SimWindow {
    fn new() -> Self {
        let window = pancurses::initscr();
        let (win_y, win_x) = window.get_max_yx();
        let top_bar = window.subwin(1, win_x, 0, 0).unwrap();
        let bottom_bar = window.subwin(1, win_x, win_y - 1, 0).unwrap();
        let grid_win = window.subwin(win_y - 2, win_x, 1, 0).unwrap();

        pancurses::start_color();
        pancurses::init_pair(1, pancurses::COLOR_BLACK, pancurses::COLOR_WHITE);
        top_bar.bkgdset(ColorPair(1));
        bottom_bar.bkgdset(ColorPair(1));
        pancurses::curs_set(0);
        pancurses::noecho();
        window.keypad(true);
        window.nodelay(true);

        SimWindow {
            paused: false,
            window,
            top_bar,
            bottom_bar,
            grid_win,
        }
    }

    fn update(&self, sim: &Simulation, generations: u64) {
        self.grid_win.erase();
        self.grid_win.mvprintw(0, 0, sim.grid().to_string());
        self.grid_win.refresh();
        self.top_bar.erase();
        self.top_bar
            .mvprintw(0, 0, format!("Gen: {}/{}", sim.generation(), generations));
        self.top_bar
            .printw(format!("  Cells: {}", sim.grid().population()));
        self.top_bar.refresh();
        let status_str = if self.paused {
            "Paused. Press [space] to resume, [.] to step, [q] to quit."
        } else {
            "Running... Press [space] to pause, [q] to quit."
        };
        self.bottom_bar.erase();
        self.bottom_bar.mvprintw(0, 0, status_str);
        self.bottom_bar.refresh();
    }

    fn resize(&mut self) {
        pancurses::resize_term(0, 0);
        let (win_y, win_x) = self.window.get_max_yx();
        self.top_bar = self.window.subwin(1, win_x, 0, 0).unwrap();
        self.bottom_bar = self.window.subwin(1, win_x, win_y - 1, 0).unwrap();
        self.grid_win = self.window.subwin(win_y - 2, win_x, 1, 0).unwrap();
    }

    fn pause(&mut self) {
        self.paused = true;
        self.window.nodelay(false);
    }

    fn start(&mut self) {
        self.paused = false;
        self.window.nodelay(true);
    }
}

/// Runs the simulation inside a curses window.
pub(crate) fn view(args: Args) {
    let Args {
        mut sim,
        generations,
        delay,
        ..
    } = args;
    let mut sim_win = SimWindow::new();
    sim_win.update(&sim, generations);

    while sim.generation() < generations {
        match sim_win.window.getch() {
            Some(Input::Character('q')) => break,
            Some(Input::Character(' ')) | Some(Input::Character('\n')) | Some(Input::KeyEnter) => {
                if sim_win.paused {
                    sim_win.start();
                } else {
                    sim_win.pause();
                }
                sim_win.update(&sim, generations);
            }
            Some(Input::Character('.')) if sim_win.paused => {
                sim.step();
                sim_win.update(&sim, generations);
            }
            Some(Input::KeyResize) => {
                sim_win.resize();
                sim_win.update(&sim, generations);
            }
            None => {
                sim.step();
                sim_win.update(&sim, generations);
                thread::sleep(delay);
            }
            _ => (),
        }
    }

    if sim.generation() >= generations {
        sim_win.pause();
        sim_win.update(&sim, generations);
        sim_win.bottom_bar.erase();
        sim_win
            .bottom_bar
            .mvprintw(0, 0, "Done. Press any key to quit.");
        sim_win.bottom_bar.refresh();
        sim_win.window.getch();
    }
    pancurses::endwin();
    println!("{}", sim.grid());
}
