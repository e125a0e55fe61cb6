use celestial_sim::{
    math::Vector3,
    scenario::ScenarioBuilder,
    SimulationWorld,
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use std::thread::sleep;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType, size},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const SIMULATION_DURATION: f32 = 20.0; // seconds of wall time
const SUBSTEPS_PER_FRAME: usize = 20; // each frame covers this many simulated frames
const VIEW_EXTENT: f32 = 600.0; // world units from the center to the screen edge
const BODY_CHARS: [char; 4] = ['☼', '●', '◆', '○'];
const BODY_COLORS: [Color; 4] = [
    Color::Yellow,
    Color::Cyan,
    Color::Red,
    Color::Green,
];

/// Projects the orbital (XZ) plane onto the terminal grid
fn to_screen(position: Vector3, width: u16, height: u16) -> Option<(u16, u16)> {
    let half_w = width as f32 / 2.0;
    // Terminal cells are roughly twice as tall as they are wide
    let half_h = height as f32 / 2.0;
    let scale = half_w.min(half_h * 2.0) / VIEW_EXTENT;

    let x = (half_w + position.x * scale).round();
    let y = (half_h + position.z * scale / 2.0).round();

    if x >= 0.0 && y >= 1.0 && x < width as f32 && y < height as f32 {
        Some((x as u16, y as u16))
    } else {
        None
    }
}

fn draw_world(
    stdout: &mut std::io::Stdout,
    world: &SimulationWorld,
    width: u16,
    height: u16,
) -> Result<(), std::io::Error> {
    stdout.queue(Clear(ClearType::All))?;

    for (i, snapshot) in world.body_snapshots().iter().enumerate() {
        if let Some((x, y)) = to_screen(snapshot.position, width, height) {
            stdout.queue(MoveTo(x, y))?
                  .queue(SetForegroundColor(BODY_COLORS[i % BODY_COLORS.len()]))?
                  .queue(Print(BODY_CHARS[i % BODY_CHARS.len()]))?
                  .queue(ResetColor)?;
        }
    }

    if let Some((x, y)) = to_screen(world.camera().get_position(), width, height) {
        stdout.queue(MoveTo(x, y))?
              .queue(SetForegroundColor(Color::White))?
              .queue(Print('@'))?
              .queue(ResetColor)?;
    }

    let diagnostics = world.diagnostics();
    stdout.queue(MoveTo(0, 0))?
          .queue(Print(format!(
              "t = {:8.1}  frame = {:6}  energy = {:12.1}  camera = ({:6.1}, {:6.1}, {:6.1})",
              world.get_time(),
              world.get_frame(),
              diagnostics.total_energy,
              world.camera().get_position().x,
              world.camera().get_position().y,
              world.camera().get_position().z,
          )))?;

    stdout.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Initialize terminal
    let mut stdout = stdout();
    stdout.execute(Hide)?;
    let (width, height) = size()?;

    let mut world = ScenarioBuilder::solar_demo().build()?;
    let frame_dt = FRAME_DURATION.as_secs_f32();

    stdout.execute(Clear(ClearType::All))?;

    // Main simulation loop
    let start_time = Instant::now();
    let mut frame_time = Instant::now();

    while start_time.elapsed().as_secs_f32() < SIMULATION_DURATION {
        for _ in 0..SUBSTEPS_PER_FRAME {
            world.advance(frame_dt)?;
        }

        draw_world(&mut stdout, &world, width, height)?;

        // Timing control
        let elapsed = frame_time.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
        frame_time = Instant::now();
    }

    // Clean up
    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, height.saturating_sub(1)))?;

    Ok(())
}
