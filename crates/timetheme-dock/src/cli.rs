//! Command-line front end for the dock

use crate::state::{DockAction, DockState};
use crate::theme::Theme;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use timetheme_core::{
    spawn_runtime_tasks, time_label, EngineConfig, Hour, MemoryStore, PreferenceStore,
    SharedEngine, SliderChannel, Storage, ThemePeriod, ThemeSnapshot, TimeThemeEngine,
};
use tracing::{info, warn};

/// Time-of-day theme engine for the portfolio site
#[derive(Debug, Parser)]
#[command(name = "timetheme", version, about)]
pub struct Cli {
    /// Directory holding the preferences database
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, global = true, conflicts_with = "data_dir")]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the resolved theme
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Flip the dark mode override
    ToggleDark,
    /// Pin or unpin the manual period
    ToggleManual,
    /// Choose the manual period (day, afternoon, evening, night)
    SetPeriod { period: ThemePeriod },
    /// Swap between a day and a night pin
    Cycle,
    /// Forget saved preferences and return to auto mode
    Reset,
    /// Resolve the theme for an hour without saving anything
    Simulate {
        hour: Hour,
        #[arg(long)]
        json: bool,
    },
    /// Print the slider caption for an hour
    Label { hour: Hour },
    /// Describe the background scene and palette
    Scene {
        #[arg(long)]
        hour: Option<Hour>,
    },
    /// Keep running and print every change; --simulate replays slider positions
    Watch {
        #[arg(long = "simulate")]
        simulate: Vec<Hour>,
        /// Pause between replayed slider positions
        #[arg(long, default_value_t = 1)]
        step_secs: u64,
    },
}

/// Default location of the preferences database
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timetheme")
}

/// Open the preference store selected on the command line
pub fn open_store(cli: &Cli) -> Arc<dyn PreferenceStore> {
    if cli.in_memory {
        return Arc::new(MemoryStore::new());
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    match Storage::new_with_path(&data_dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            warn!("Failed to open storage, using in-memory: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

/// Run a parsed command line against the local clock
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config = EngineConfig::from_env();
    let mut engine = TimeThemeEngine::with_system_clock(open_store(&cli));
    engine.initialize();
    execute(engine, cli.command, &config, out).await
}

/// Run one command against an already initialised engine
pub async fn execute<W: Write>(
    engine: TimeThemeEngine,
    command: Command,
    config: &EngineConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let engine = engine.into_shared();
    let (slider, slider_rx) = SliderChannel::new(config.slider_buffer);
    let mut runtime = spawn_runtime_tasks(engine.clone(), slider_rx, config);
    let mut dock = DockState::new(engine.clone(), slider);

    let result = dispatch(&engine, &mut dock, command, out).await;

    runtime.shutdown().await;
    result
}

async fn dispatch<W: Write>(
    engine: &SharedEngine,
    dock: &mut DockState,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Status { json } => {
            write_snapshot(out, &dock.snapshot().await, json)?;
        }
        Command::ToggleDark => {
            dock.dispatch(DockAction::ToggleDarkMode).await?;
            write_snapshot(out, &dock.snapshot().await, false)?;
        }
        Command::ToggleManual => {
            dock.dispatch(DockAction::ToggleManualMode).await?;
            write_snapshot(out, &dock.snapshot().await, false)?;
        }
        Command::SetPeriod { period } => {
            dock.dispatch(DockAction::SetManualPeriod(period)).await?;
            let snapshot = dock.snapshot().await;
            write_snapshot(out, &snapshot, false)?;
            if !snapshot.is_manual_mode {
                writeln!(
                    out,
                    "note:        manual mode is off, {} was not saved; enable manual mode first",
                    period
                )?;
            }
        }
        Command::Cycle => {
            dock.dispatch(DockAction::CycleTheme).await?;
            write_snapshot(out, &dock.snapshot().await, false)?;
        }
        Command::Reset => {
            engine.lock().await.reset_preferences();
            write_snapshot(out, &dock.snapshot().await, false)?;
        }
        Command::Simulate { hour, json } => {
            let snapshot = slide_to(engine, dock, Some(hour)).await?;
            write_snapshot(out, &snapshot, json)?;
        }
        Command::Label { hour } => {
            writeln!(out, "{}", time_label(hour))?;
        }
        Command::Scene { hour } => {
            let snapshot = match hour {
                Some(hour) => slide_to(engine, dock, Some(hour)).await?,
                None => dock.snapshot().await,
            };
            write_theme(out, &Theme::for_snapshot(&snapshot))?;
        }
        Command::Watch { simulate, step_secs } => {
            watch(engine, dock, simulate, Duration::from_secs(step_secs), out).await?;
        }
    }

    Ok(())
}

/// Move the slider (or release it) and wait until the engine has applied it
async fn slide_to(
    engine: &SharedEngine,
    dock: &mut DockState,
    hour: Option<Hour>,
) -> anyhow::Result<ThemeSnapshot> {
    let mut rx = engine.lock().await.subscribe();

    match hour {
        Some(hour) => {
            if !dock.slider_open {
                dock.dispatch(DockAction::OpenTimeSlider).await?;
            }
            dock.dispatch(DockAction::DragSlider(hour.into())).await?;
        }
        None => dock.dispatch(DockAction::CloseTimeSlider).await?,
    }

    let snapshot = *rx.wait_for(|s| s.simulated_hour == hour).await?;
    Ok(snapshot)
}

async fn watch<W: Write>(
    engine: &SharedEngine,
    dock: &mut DockState,
    simulate: Vec<Hour>,
    step: Duration,
    out: &mut W,
) -> anyhow::Result<()> {
    write_snapshot(out, &dock.snapshot().await, false)?;

    if simulate.is_empty() {
        let mut rx = engine.lock().await.subscribe();
        rx.borrow_and_update();
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    changed?;
                    let snapshot = *rx.borrow_and_update();
                    writeln!(out)?;
                    write_snapshot(out, &snapshot, false)?;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }
        }
        return Ok(());
    }

    for hour in simulate {
        let snapshot = slide_to(engine, dock, Some(hour)).await?;
        writeln!(out)?;
        writeln!(out, "[{}]", dock.slider_label())?;
        write_snapshot(out, &snapshot, false)?;
        tokio::time::sleep(step).await;
    }

    let snapshot = slide_to(engine, dock, None).await?;
    writeln!(out)?;
    writeln!(out, "[clock]")?;
    write_snapshot(out, &snapshot, false)?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Print a snapshot as aligned text or JSON
pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &ThemeSnapshot,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(snapshot)?)?;
        return Ok(());
    }

    let hour_source = if snapshot.simulated_hour.is_some() {
        "simulated"
    } else {
        "clock"
    };
    let mode = if snapshot.is_manual_mode {
        format!("manual ({})", snapshot.manual_period)
    } else {
        "auto".to_string()
    };

    writeln!(out, "period:      {}", snapshot.effective_period)?;
    writeln!(out, "stored:      {}", snapshot.current_period)?;
    writeln!(out, "background:  {}", snapshot.background_period)?;
    writeln!(out, "hour:        {} ({})", snapshot.effective_hour, hour_source)?;
    writeln!(out, "mode:        {}", mode)?;
    writeln!(out, "dark:        {}", if snapshot.is_dark_override { "on" } else { "off" })?;
    writeln!(out, "daytime:     {}", yes_no(snapshot.is_daytime))?;
    writeln!(out, "glow:        {}", yes_no(snapshot.should_glow))?;
    writeln!(out, "comets:      {}", yes_no(snapshot.should_show_comets))?;
    writeln!(out, "text:        {}", snapshot.text_style)?;
    Ok(())
}

/// Print the scene and palette a renderer would use
pub fn write_theme<W: Write>(out: &mut W, theme: &Theme) -> anyhow::Result<()> {
    let scene = &theme.scene;
    let mut elements = Vec::new();
    if scene.sun {
        elements.push("sun");
    }
    if scene.moon {
        elements.push("moon");
    }
    if scene.stars {
        elements.push("stars");
    }
    if scene.glowworms {
        elements.push("glowworms");
    }

    writeln!(out, "scene:       {}", scene.period)?;
    writeln!(out, "sky:         {}", scene.sky_css())?;
    writeln!(out, "mountains:   {}", scene.mountain.to_css_hex())?;
    writeln!(out, "trees:       {}", scene.trees.to_css_hex())?;
    writeln!(out, "elements:    {}", elements.join(", "))?;
    writeln!(out, "comets:      {}", theme.comet_count)?;
    let palette = &theme.palette;
    writeln!(out, "text color:  {}", palette.text_primary.to_css())?;
    writeln!(out, "muted text:  {}", palette.text_secondary.to_css())?;
    match palette.glow {
        Some(glow) => writeln!(out, "glow color:  {}", glow.to_css())?,
        None => writeln!(out, "glow color:  none")?,
    }
    writeln!(out, "dock:        {}", palette.dock_bg.to_css())?;
    writeln!(out, "dock border: {}", palette.dock_border.to_css())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetheme_core::{FixedClock, KEY_DARK_OVERRIDE, KEY_MANUAL_MODE, KEY_MANUAL_THEME};

    fn engine_at(h: u32, store: Arc<MemoryStore>) -> TimeThemeEngine {
        let clock = Arc::new(FixedClock::new(Hour::new(h).unwrap()));
        let mut engine = TimeThemeEngine::new(store, clock);
        engine.initialize();
        engine
    }

    async fn run_at(h: u32, store: Arc<MemoryStore>, command: Command) -> String {
        let mut out = Vec::new();
        execute(engine_at(h, store), command, &EngineConfig::default(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        let cli = Cli::try_parse_from(["timetheme", "set-period", "evening"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::SetPeriod {
                period: ThemePeriod::Evening
            }
        ));

        let cli = Cli::try_parse_from(["timetheme", "--in-memory", "simulate", "23", "--json"])
            .unwrap();
        assert!(cli.in_memory);
        assert!(matches!(cli.command, Command::Simulate { json: true, .. }));

        let cli = Cli::try_parse_from(["timetheme", "watch", "--simulate", "3", "--simulate", "14"])
            .unwrap();
        match cli.command {
            Command::Watch { simulate, step_secs } => {
                assert_eq!(simulate, vec![Hour::new(3).unwrap(), Hour::new(14).unwrap()]);
                assert_eq!(step_secs, 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Cli::try_parse_from(["timetheme", "set-period", "morning"]).is_err());
        assert!(Cli::try_parse_from(["timetheme", "simulate", "24"]).is_err());
        assert!(Cli::try_parse_from(["timetheme", "--in-memory", "--data-dir", "/tmp", "status"])
            .is_err());
    }

    #[test]
    fn test_open_store_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["timetheme", "--data-dir", path, "status"]).unwrap();

        let store = open_store(&cli);
        store.save(KEY_MANUAL_MODE, "true").unwrap();
        assert!(dir.path().join(timetheme_core::storage::DB_FILE_NAME).exists());

        let reopened = open_store(&cli);
        assert_eq!(reopened.load(KEY_MANUAL_MODE).unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_status_text() {
        let store = Arc::new(MemoryStore::new());
        let output = run_at(14, store, Command::Status { json: false }).await;
        assert!(output.contains("period:      afternoon"));
        assert!(output.contains("hour:        14:00 (clock)"));
        assert!(output.contains("text:        text-light-mode"));
    }

    #[tokio::test]
    async fn test_toggle_dark_persists() {
        let store = Arc::new(MemoryStore::new());
        let output = run_at(14, store.clone(), Command::ToggleDark).await;
        assert!(output.contains("period:      night"));
        assert!(output.contains("dark:        on"));
        assert_eq!(store.load(KEY_DARK_OVERRIDE).unwrap().as_deref(), Some("true"));

        let output = run_at(14, store, Command::Status { json: false }).await;
        assert!(output.contains("dark:        on"));
    }

    #[tokio::test]
    async fn test_set_period_then_toggle_manual() {
        let store = Arc::new(MemoryStore::new());
        let command = Command::SetPeriod {
            period: ThemePeriod::Evening,
        };
        let output = run_at(9, store.clone(), command).await;
        // the pending choice lives only in memory
        assert!(output.contains("note:        manual mode is off, evening was not saved"));
        assert_eq!(store.load(KEY_MANUAL_THEME).unwrap(), None);

        let output = run_at(9, store.clone(), Command::ToggleManual).await;
        assert!(output.contains("mode:        manual (night)"));
        assert_eq!(store.load(KEY_MANUAL_MODE).unwrap().as_deref(), Some("true"));
        assert_eq!(store.load(KEY_MANUAL_THEME).unwrap().as_deref(), Some("night"));
    }

    #[tokio::test]
    async fn test_reset_clears_saved_preferences() {
        let store = Arc::new(MemoryStore::new());
        run_at(14, store.clone(), Command::Cycle).await;
        run_at(14, store.clone(), Command::ToggleDark).await;
        assert_eq!(store.entries().len(), 3);

        let output = run_at(14, store.clone(), Command::Reset).await;
        assert!(output.contains("period:      afternoon"));
        assert!(output.contains("mode:        auto"));
        assert!(output.contains("dark:        off"));
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn test_simulate_json_does_not_persist() {
        let store = Arc::new(MemoryStore::new());
        let output = run_at(
            10,
            store.clone(),
            Command::Simulate {
                hour: Hour::new(23).unwrap(),
                json: true,
            },
        )
        .await;

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["effectivePeriod"], "night");
        assert_eq!(value["shouldGlow"], true);
        assert_eq!(value["shouldShowComets"], true);
        assert_eq!(value["isDaytime"], false);
        assert_eq!(value["textStyle"], "text-dark-mode");
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn test_scene_for_hour() {
        let output = run_at(
            10,
            Arc::new(MemoryStore::new()),
            Command::Scene {
                hour: Some(Hour::new(19).unwrap()),
            },
        )
        .await;
        assert!(output.contains("scene:       evening"));
        assert!(output.contains("elements:    sun, stars, glowworms"));
        assert!(output.contains("comets:      0"));
        assert!(output.contains("muted text:  rgba(255, 255, 255, 0.70)"));
        assert!(output.contains("dock:        rgba(255, 255, 255, 0.40)"));
        assert!(output.contains("dock border: rgba(0, 0, 0, 0.10)"));
    }

    #[tokio::test]
    async fn test_label() {
        let output = run_at(
            10,
            Arc::new(MemoryStore::new()),
            Command::Label {
                hour: Hour::new(0).unwrap(),
            },
        )
        .await;
        assert_eq!(output, "12:00 AM - Night\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_replays_slider() {
        let output = run_at(
            12,
            Arc::new(MemoryStore::new()),
            Command::Watch {
                simulate: vec![Hour::new(3).unwrap(), Hour::new(19).unwrap()],
                step_secs: 1,
            },
        )
        .await;

        assert!(output.contains("[3:00 AM - Night]"));
        assert!(output.contains("[7:00 PM - Evening]"));
        let tail = output.rsplit("[clock]").next().unwrap();
        assert!(tail.contains("period:      afternoon"));
        assert!(tail.contains("hour:        12:00 (clock)"));
    }
}
