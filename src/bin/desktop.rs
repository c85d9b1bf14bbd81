use clap::Parser;
use log::{error, info};
use pattern_painter::{App, Grid, Input, Palette, Theme};
use sdl2::{event::Event, pixels::PixelFormatEnum, video::Window};
use std::{fmt::Display, path::PathBuf, time::Duration};

const FPS: u64 = 30;

#[derive(Parser)]
#[clap(about = "Recolor a pattern by clicking its cells")]
struct Args {
    /// Semicolon-delimited pattern of 1-based palette indices.
    #[clap(default_value = "pattern.csv")]
    pattern: PathBuf,
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();

    let palette = Palette::default();
    let grid = Grid::open(&args.pattern, &palette).error_message("Failed to load pattern", None);
    let mut app = App::new(grid, palette, Theme::default());
    let (width, height) = app.window_size();

    let sdl_context = sdl2::init().error_message("Failed to initialize SDL", None);
    let video_subsystem = sdl_context
        .video()
        .error_message("Failed to initialize video", None);
    let timer_subsystem = sdl_context
        .timer()
        .error_message("Failed to initialize timer", None);

    let window = video_subsystem
        .window("Pattern Painter", width, height)
        .position_centered()
        .build()
        .error_message("Failed to create window", None);
    info!("opened {width}x{height} window");

    let mut canvas = window.into_canvas().build().error_message("Failed to create canvas", None);
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
        .error_message("Failed to create texture", Some(canvas.window()));
    let mut event_pump = sdl_context
        .event_pump()
        .error_message("Failed to open event pump", Some(canvas.window()));

    let desired_delta = 1000 / FPS;
    while app.is_running() {
        let frame_start = timer_subsystem.ticks64();

        let inputs: Vec<Input> = event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. } => Some(Input::Quit),
                Event::MouseButtonDown { x, y, .. } => Some(Input::PointerPress { x, y }),
                _ => None,
            })
            .collect();
        app.handle_all(inputs);
        if !app.is_running() {
            break;
        }

        let frame = app.frame();
        let row_len = frame.pitch();
        texture
            .with_lock(None, |buffer, pitch| {
                for (row, src) in frame.buffer().chunks_exact(row_len).enumerate() {
                    let dst = row * pitch;
                    buffer[dst..dst + row_len].copy_from_slice(src);
                }
            })
            .error_message("Failed to upload frame", Some(canvas.window()));
        canvas
            .copy(&texture, None, None)
            .error_message("Failed to draw frame", Some(canvas.window()));
        canvas.present();

        let delta = timer_subsystem.ticks64() - frame_start;
        if delta < desired_delta {
            std::thread::sleep(Duration::from_millis(desired_delta - delta));
        }
    }
}

trait ErrorMessage {
    type Output;
    fn error_message(self, message: &str, window: Option<&Window>) -> Self::Output;
}

impl<T, E> ErrorMessage for Result<T, E>
where
    E: Display,
{
    type Output = T;
    fn error_message(self, message: &str, window: Option<&Window>) -> T {
        self.unwrap_or_else(|err| show_error(&format!("{message}: {err}"), window))
    }
}

fn show_error(message: &str, window: Option<&Window>) -> ! {
    use sdl2::messagebox::MessageBoxFlag;

    error!("{message}");
    if let Err(err) =
        sdl2::messagebox::show_simple_message_box(MessageBoxFlag::ERROR, "Error", message, window)
    {
        error!("failed to show message box: {err:?}");
    }

    std::process::exit(1)
}
