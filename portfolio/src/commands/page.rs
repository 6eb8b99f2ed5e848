use std::{io::Write, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use clap::Subcommand;
use portfolio_config::{Config, PageConfig};
use portfolio_page::{
    debounce::Debouncer,
    scroll::{active_section, navbar_scrolled, parallax_offset, Section},
    typewriter::type_out,
    Rect,
};
use tokio::sync::mpsc;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// Replay scroll events and print what the page would show for each
    /// debounced position
    Scroll {
        /// A page section as `id:top:height`, in document order
        #[arg(long = "section", required = true)]
        sections: Vec<SectionArg>,
        /// Height of the browser viewport
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,
        /// Milliseconds between two scroll events
        #[arg(long, default_value_t = 16)]
        interval: u64,
        /// Scroll positions to replay
        #[arg(required = true, allow_negative_numbers = true)]
        positions: Vec<f64>,
    },
    /// Type out a text like the hero headline
    Typewriter { text: String },
}

impl PageCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            PageCommand::Scroll {
                sections,
                viewport_height,
                interval,
                positions,
            } => {
                let sections = sections.into_iter().map(|x| x.0).collect::<Vec<_>>();
                let frames = scroll(
                    &config.page,
                    &sections,
                    viewport_height,
                    Duration::from_millis(interval),
                    positions,
                )
                .await;
                for frame in frames {
                    println!("{frame}");
                }
                Ok(())
            }
            PageCommand::Typewriter { text } => typewriter(&config.page, &text).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionArg(Section);

impl FromStr for SectionArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(height), Some(top), Some(id)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(anyhow!("Expected `id:top:height`"));
        };
        Ok(Self(Section {
            id: id.into(),
            top: top.parse().context("Invalid section top")?,
            height: height.parse().context("Invalid section height")?,
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub active_section: Option<String>,
    pub navbar_scrolled: bool,
    pub parallax_offset: f64,
    pub revealed: Vec<String>,
}

impl std::fmt::Display for ScrollFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "y={} active={} navbar={} parallax={}",
            self.scroll_y,
            self.active_section.as_deref().unwrap_or("-"),
            if self.navbar_scrolled { "scrolled" } else { "top" },
            self.parallax_offset,
        )?;
        if !self.revealed.is_empty() {
            write!(f, " revealed={}", self.revealed.join(","))?;
        }
        Ok(())
    }
}

async fn scroll(
    config: &PageConfig,
    sections: &[Section],
    viewport_height: f64,
    interval: Duration,
    positions: Vec<f64>,
) -> Vec<ScrollFrame> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debouncer = Debouncer::new(config.scroll_debounce.into());
    for scroll_y in positions {
        let tx = tx.clone();
        debouncer.call(async move {
            let _ = tx.send(scroll_y);
        });
        tokio::time::sleep(interval).await;
    }
    drop(tx);

    let mut reveal = environment::reveal_tracker(config);
    let mut frames = Vec::new();
    while let Some(scroll_y) = rx.recv().await {
        let revealed = reveal.observe(
            viewport_height,
            sections.iter().map(|section| {
                let bounds = Rect {
                    left: 0.0,
                    top: section.top - scroll_y,
                    width: 0.0,
                    height: section.height,
                };
                (&section.id, bounds)
            }),
        );
        frames.push(ScrollFrame {
            scroll_y,
            active_section: active_section(sections, scroll_y, config.scroll_spy_offset)
                .map(Into::into),
            navbar_scrolled: navbar_scrolled(scroll_y, config.navbar_scroll_threshold),
            parallax_offset: parallax_offset(scroll_y, config.parallax_rate),
            revealed,
        });
    }
    drop(debouncer);
    frames
}

async fn typewriter(config: &PageConfig, text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let mut result = Ok(());
    type_out(text, config.typewriter_delay.into(), |frame| {
        if result.is_ok() {
            result = write!(stdout, "\r{frame}").and_then(|()| stdout.flush());
        }
    })
    .await;
    result.and_then(|()| writeln!(stdout))?;
    Ok(())
}
