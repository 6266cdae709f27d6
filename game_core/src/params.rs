/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (logical resolution)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;
    pub const WINDOW_TITLE: &'static str = "Pong";

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    pub const PLAYER_STEP: f32 = 4.0; // units per frame
    pub const AI_STEP: f32 = 2.0; // units per frame

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_RESET_SPEED: f32 = 2.0; // per axis, sign randomized
    pub const BALL_START_SPEED_MIN: f32 = 1.0;
    pub const BALL_START_SPEED_MAX: f32 = 3.0; // exclusive

    // Score overlay
    pub const SCORE_TEXT_X: f32 = 230.0;
    pub const SCORE_TEXT_Y: f32 = 20.0;
}
