//! Indicator preview rendering

use anyhow::{Context, Result};
use pip_core::{DrawCommand, RecordingContext, Size};
use pip_theme::IndicatorStyle;
use pip_widgets::{CirclePageIndicator, MeasureSpec, Widget};
use serde::Serialize;

use crate::sim_pager::SimPager;

/// Paging scenario to render
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub pages: usize,
    pub current: usize,
    pub offset_px: i32,
    pub page_width_px: i32,
    pub view_width: u32,
    pub snap: Option<bool>,
    pub centered: Option<bool>,
    pub style: IndicatorStyle,
}

/// One recorded circle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub kind: &'static str,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: String,
}

/// Result of a preview render
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub current_page: usize,
    pub snap_page: usize,
    /// Page reported by the pager, which clamps out-of-range requests
    pub pager_page: usize,
    pub circles: Vec<Circle>,
}

impl Circle {
    fn from_command(command: &DrawCommand) -> Self {
        let (kind, radius, brush) = match command {
            DrawCommand::FillCircle { radius, brush, .. } => ("fill", *radius, brush),
            DrawCommand::StrokeCircle { radius, brush, .. } => ("stroke", *radius, brush),
        };
        let center = command.center();
        Self {
            kind,
            x: center.x,
            y: center.y,
            radius,
            color: format!("#{:08X}", brush.color().to_argb_hex()),
        }
    }
}

/// Bind an indicator to a scripted pager, replay the scenario and draw it
pub fn render(request: &PreviewRequest) -> Result<Preview> {
    let mut indicator = CirclePageIndicator::with_style(&request.style);
    if let Some(snap) = request.snap {
        indicator.set_snap(snap);
    }
    if let Some(centered) = request.centered {
        indicator.set_centered(centered);
    }

    let pager = SimPager::new(request.pages, request.page_width_px);
    indicator
        .bind(pager.clone())
        .context("Failed to bind indicator to pager")?;
    indicator
        .set_current_page(request.current)
        .context("Failed to move pager")?;
    if request.offset_px != 0 {
        pager.drag(indicator.current_page(), request.offset_px);
    }

    let size = indicator
        .measure(
            MeasureSpec::AtMost(request.view_width),
            MeasureSpec::Unspecified,
        )
        .context("Failed to measure indicator")?;
    // The preview lays the indicator out across the whole view width
    let frame = Size::new(request.view_width as f32, size.height as f32);
    indicator.layout(frame);

    let mut ctx = RecordingContext::new();
    indicator
        .draw(&mut ctx)
        .context("Failed to draw indicator")?;
    tracing::debug!(commands = ctx.commands().len(), "Recorded indicator draw");

    Ok(Preview {
        width: size.width,
        height: size.height,
        current_page: indicator.current_page(),
        snap_page: indicator.snap_page(),
        pager_page: pager.current_page(),
        circles: ctx.take_commands().iter().map(Circle::from_command).collect(),
    })
}

impl Preview {
    /// Human readable listing
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "indicator {}x{} (current page {}, snap page {}, pager page {})\n",
            self.width, self.height, self.current_page, self.snap_page, self.pager_page
        );
        for circle in &self.circles {
            out.push_str(&format!(
                "  {:<6} x={:>8.2} y={:>6.2} r={:.2} {}\n",
                circle.kind, circle.x, circle.y, circle.radius, circle.color
            ));
        }
        out
    }
}
