use anyhow::Context;
use macroquad::prelude::*;
use tilemap_compositor::{
    compose, demo_map, poll_commands, Palette, Step, TileMap, ViewCommand, ViewState,
};

const WINDOW_W: i32 = 1280;
const WINDOW_H: i32 = 720;

const TILE_W: u32 = 16;
const TILE_H: u32 = 16;

const START_SCALE: f32 = 5.0;
const SCALE_STEP: f32 = 0.2;
const MIN_SCALE: f32 = 0.2;
const PAN_STEP: i32 = 20;

const ASSET_DIR: &str = "assets";

struct App {
    map: TileMap,
    palette: Palette,
    view: ViewState,
    composite: Texture2D,
}

impl App {
    async fn load() -> anyhow::Result<Self> {
        let palette = Palette::load(ASSET_DIR, TILE_W, TILE_H)
            .await
            .context("loading tile images")?;
        let map = demo_map().context("building demo map")?;
        let view = ViewState::new(START_SCALE, PAN_STEP, SCALE_STEP, MIN_SCALE);
        let image = compose(&map, &palette, TILE_W, TILE_H, view.scale())
            .context("compositing the initial map")?;
        let composite = upload(&image);
        Ok(App {
            map,
            palette,
            view,
            composite,
        })
    }

    /// Returns false when the command ends the main loop.
    fn handle(&mut self, cmd: ViewCommand) -> bool {
        match self.view.apply(cmd) {
            Step::Idle => {}
            Step::Quit => return false,
            Step::Rescale(scale) => {
                match compose(&self.map, &self.palette, TILE_W, TILE_H, scale) {
                    Ok(image) => {
                        // Assigning drops the previous composite right here.
                        self.composite = upload(&image);
                        self.view.commit_scale(scale);
                    }
                    Err(e) => warn!("rescale to {} rejected: {}", scale, e),
                }
            }
        }
        true
    }

    fn draw(&self) {
        clear_background(BLACK);
        draw_texture(
            &self.composite,
            self.view.pan_x as f32,
            self.view.pan_y as f32,
            WHITE,
        );
        draw_text(
            &format!(
                "pan_x: {} | pan_y: {} | scale: {:.1}",
                self.view.pan_x,
                self.view.pan_y,
                self.view.scale()
            ),
            2.0,
            14.0,
            20.0,
            WHITE,
        );
    }
}

fn upload(image: &Image) -> Texture2D {
    let tex = Texture2D::from_image(image);
    tex.set_filter(FilterMode::Nearest);
    tex
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Tilemap Compositor".into(),
        window_width: WINDOW_W,
        window_height: WINDOW_H,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = match App::load().await {
        Ok(app) => app,
        Err(e) => {
            error!("startup failed: {:#}", e);
            return;
        }
    };

    'running: loop {
        for cmd in poll_commands() {
            if !app.handle(cmd) {
                break 'running;
            }
        }
        app.draw();
        next_frame().await;
    }
}
