#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use dew_point_explorer::{
    app::{AppError, AppState, Event},
    config,
    explanation::ExplanationCommand,
    format::NumberFormat,
    i18n::{self, keys, Translator},
    input::Field,
    logging,
    psychro::relative_humidity,
    scene::{Color, Dash, Primitive, PrimitiveKind, Scene, TextAnchor},
    ui_cli,
    viewport::Viewport,
};
use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotBounds, PlotPoint, Points, Text};
use image::GenericImageView;
use rfd::FileDialog;

const LANGUAGES: [(&str, &str); 3] = [("da", "Dansk"), ("en", "English"), ("ko-kr", "한국어")];

fn main() -> Result<(), eframe::Error> {
    // --lang xx 또는 --lang=xx (xx: auto/da/en/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    logging::init(&app_cfg.log_filter);
    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );
    if cli_lang.is_some() {
        app_cfg.language = lang.clone();
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 820.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    tracing::info!(%lang, "starting GUI");
    eframe::run_native(
        "Dugpunktskurve",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::debug!("{e}");
            }
            Box::new(GuiApp::new(app_cfg, &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 언어팩용 폰트를 찾아 등록한다. 없으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = [
        "assets/fonts/malgun.ttf",
        "assets/fonts/NotoSansKR-Regular.ttf",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ]
    .iter()
    .map(std::path::PathBuf::from)
    .collect();
    if let Some(windir) = env::var_os("WINDIR") {
        candidates.push(Path::new(&windir).join("Fonts").join("malgun.ttf"));
    }
    let path = candidates
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| "no CJK font found, keeping default fonts".to_string())?;
    let bytes = fs::read(&path).map_err(|e| format!("failed to read font ({}): {e}", path.display()))?;
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".into(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".into());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    state: AppState,
    temperature_input: String,
    dew_point_input: String,
    status: Option<String>,
    plot_rect: Option<egui::Rect>,
    pending_png: Option<PathBuf>,
}

impl GuiApp {
    fn new(config: config::Config, lang: &str) -> Self {
        let tr = Translator::new_with_pack(lang, config.language_pack_dir.as_deref());
        let state = AppState::new(&config);
        Self {
            config,
            tr,
            state,
            temperature_input: String::new(),
            dew_point_input: String::new(),
            status: None,
            plot_rect: None,
            pending_png: None,
        }
    }

    fn dispatch(&mut self, event: Event, now: Duration) {
        self.state.update(&event, now);
        if matches!(event, Event::ClearAndReset) {
            self.temperature_input.clear();
            self.dew_point_input.clear();
        }
    }

    fn set_language(&mut self, code: &str) {
        self.tr = Translator::new_with_pack(code, self.config.language_pack_dir.as_deref());
        self.config.language = code.to_string();
        if let Err(e) = self.config.save() {
            tracing::warn!(%e, "could not save language");
        }
    }

    fn export_scene(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("scene.toml")
            .save_file()
        else {
            return;
        };
        let scene = self.state.scene(&self.tr);
        let result = toml::to_string_pretty(&scene)
            .map_err(AppError::from)
            .and_then(|text| fs::write(&path, text).map_err(AppError::from));
        self.status = Some(match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "scene exported");
                format!("{} {}", self.tr.t(keys::GUI_EXPORTED), path.display())
            }
            Err(e) => {
                tracing::error!(%e, "scene export failed");
                format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))
            }
        });
    }

    fn request_png(&mut self, ctx: &egui::Context) {
        let Some(path) = FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("dugpunktskurve.png")
            .save_file()
        else {
            return;
        };
        self.pending_png = Some(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
    }

    /// 요청한 스크린샷이 도착하면 그래프 영역만 잘라 PNG로 저장한다.
    fn save_pending_png(&mut self, ctx: &egui::Context) {
        if self.pending_png.is_none() {
            return;
        }
        let shot = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let (Some(shot), Some(path)) = (shot, self.pending_png.take()) else {
            return;
        };
        let region = match self.plot_rect {
            Some(rect) => shot.region(&rect, Some(ctx.pixels_per_point())),
            None => (*shot).clone(),
        };
        let result = color_image_to_rgba(&region)
            .ok_or_else(|| {
                AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "empty screenshot",
                ))
            })
            .and_then(|img| img.save(&path).map_err(AppError::from));
        self.status = Some(match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "chart image saved");
                format!("{} {}", self.tr.t(keys::GUI_EXPORTED), path.display())
            }
            Err(e) => {
                tracing::error!(%e, "chart image export failed");
                format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))
            }
        });
    }

    fn input_row(&mut self, ui: &mut egui::Ui, field: Field, now: Duration) {
        let tr = self.tr.clone();
        let (label, placeholder, note, buf) = match field {
            Field::Temperature => (
                keys::GUI_TEMPERATURE_LABEL,
                keys::GUI_TEMPERATURE_PLACEHOLDER,
                keys::GUI_TEMPERATURE_NOTE,
                &mut self.temperature_input,
            ),
            Field::DewPoint => (
                keys::GUI_DEW_POINT_LABEL,
                keys::GUI_DEW_POINT_PLACEHOLDER,
                keys::GUI_DEW_POINT_NOTE,
                &mut self.dew_point_input,
            ),
        };
        ui.vertical(|ui| {
            ui.strong(tr.t(label));
            let resp = ui.add(
                egui::TextEdit::singleline(buf)
                    .hint_text(tr.t(placeholder))
                    .desired_width(220.0),
            );
            ui.label(egui::RichText::new(tr.t(note)).small().weak());
            if resp.changed() {
                let text = buf.clone();
                let event = match field {
                    Field::Temperature => Event::SetTemperature(text),
                    Field::DewPoint => Event::SetDewPoint(text),
                };
                self.state.update(&event, now);
                resync_field(buf, self.state.inputs().text(field));
            }
            if let Some(hint) = self.state.hint(field) {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 60, 60),
                    ui_cli::hint_text(&tr, field, hint),
                );
            }
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui, now: Duration) {
        let tr = self.tr.clone();
        let ctx = ui.ctx().clone();
        ui.horizontal(|ui| {
            let toggle_key = if self.state.show_unsaturated() {
                keys::GUI_HIDE_UNSATURATED
            } else {
                keys::GUI_SHOW_UNSATURATED
            };
            if ui.button(tr.t(toggle_key)).clicked() {
                self.dispatch(Event::ToggleUnsaturated, now);
            }
            let active = self.state.explanation().is_active();
            if active {
                if ui.button(tr.t(keys::GUI_STOP)).clicked() {
                    self.dispatch(Event::Explain(ExplanationCommand::Stop), now);
                }
            } else {
                let enabled = self.state.intersection().is_some();
                if ui
                    .add_enabled(enabled, egui::Button::new(tr.t(keys::GUI_EXPLAIN)))
                    .clicked()
                {
                    self.dispatch(Event::Explain(ExplanationCommand::Start), now);
                }
            }
            if ui.button(tr.t(keys::GUI_RESET)).clicked() {
                self.dispatch(Event::ClearAndReset, now);
            }
            if ui.button(tr.t(keys::GUI_EXPORT)).clicked() {
                self.export_scene();
            }
            if ui.button(tr.t(keys::GUI_EXPORT_PNG)).clicked() {
                self.request_png(&ctx);
            }
            ui.separator();
            let current = self.tr.language_code().to_string();
            let mut selected = current.clone();
            egui::ComboBox::from_id_source("language")
                .selected_text(language_name(&selected))
                .show_ui(ui, |ui| {
                    for (code, name) in LANGUAGES {
                        ui.selectable_value(&mut selected, code.to_string(), name);
                    }
                });
            if selected != current {
                self.set_language(&selected);
            }
        });
    }

    fn explanation_panel(&mut self, ui: &mut egui::Ui, now: Duration) {
        let Some(step) = self.state.explanation().step() else {
            return;
        };
        let tr = self.tr.clone();
        let key = match step.number() {
            1 => keys::STEP_1,
            2 => keys::STEP_2,
            _ => keys::STEP_3,
        };
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(step.previous().is_some(), egui::Button::new(tr.t(keys::GUI_PREVIOUS)))
                    .clicked()
                {
                    self.dispatch(Event::Explain(ExplanationCommand::Previous), now);
                }
                ui.strong(format!("{}/3", step.number()));
                if ui
                    .add_enabled(step.next().is_some(), egui::Button::new(tr.t(keys::GUI_NEXT)))
                    .clicked()
                {
                    self.dispatch(Event::Explain(ExplanationCommand::Next), now);
                }
            });
            ui.label(tr.t(key));
        });
    }

    fn result_panel(&self, ui: &mut egui::Ui) {
        let Some(point) = self.state.intersection() else {
            return;
        };
        let tr = &self.tr;
        let fmt = tr.number_format();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(tr.t(keys::RESULT_HEADING).trim());
            egui::Grid::new("result_grid").num_columns(2).show(ui, |ui| {
                ui.label(tr.t(keys::RESULT_TEMPERATURE));
                ui.label(format!("{} °C", fmt.trimmed(point.temperature)));
                ui.end_row();
                ui.label(tr.t(keys::RESULT_DEW_POINT));
                ui.label(format!("{} °C", fmt.trimmed(point.dew_point)));
                ui.end_row();
                ui.label(tr.t(keys::RESULT_HUMIDITY));
                ui.label(format!("{} g/m³", fmt.fixed(point.humidity, 2)));
                ui.end_row();
                ui.label(tr.t(keys::RESULT_RELATIVE_HUMIDITY));
                ui.label(format!("{} %", fmt.fixed(point.relative_humidity, 1)));
                ui.end_row();
                ui.label(tr.t(keys::RESULT_MAGNUS_RELATIVE_HUMIDITY));
                ui.label(format!(
                    "{} %",
                    fmt.fixed(relative_humidity(point.temperature, point.dew_point), 1)
                ));
                ui.end_row();
            });
            ui.separator();
            ui.label(tr.t(keys::TEXT_RH_FORMULA_GENERAL));
            ui.label(tr.fill(
                keys::TEXT_RH_FORMULA_PERCENT,
                &[
                    ("actual", fmt.fixed(point.humidity, 1)),
                    ("max", fmt.fixed(point.max_humidity, 1)),
                    ("rh", fmt.fixed(point.relative_humidity, 1)),
                ],
            ));
        });
    }

    fn plot(&mut self, ui: &mut egui::Ui, now: Duration) {
        let scene = self.state.scene(&self.tr);
        let fmt = self.tr.number_format();
        let view = scene.viewport;
        let formatter_scene = scene.clone();
        let plot = Plot::new("dew_point_plot")
            .legend(Legend::default())
            .x_axis_label(scene.x_axis_title.clone())
            .y_axis_label(scene.y_axis_title.clone())
            .allow_double_click_reset(false)
            .label_formatter(move |name, value| {
                tooltip_at(&formatter_scene, name, value.x, value.y, &fmt).unwrap_or_default()
            });
        let response = plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [view.x_min(), view.y_range[0]],
                [view.x_max(), view.y_max()],
            ));
            for p in &scene.primitives {
                draw_primitive(plot_ui, p);
            }
        });

        self.plot_rect = Some(response.response.rect);
        if response.response.double_clicked() {
            self.dispatch(Event::ResetView, now);
            return;
        }
        let interacted = response.response.dragged()
            || (response.response.hovered()
                && ui.input(|i| i.raw_scroll_delta != egui::Vec2::ZERO || i.zoom_delta() != 1.0));
        if interacted {
            let b = response.transform.bounds();
            let (min, max) = (b.min(), b.max());
            if bounds_moved(&view, min, max) {
                self.dispatch(
                    Event::PanZoom {
                        x_min: min[0],
                        x_max: max[0],
                        y_min: min[1],
                        y_max: max[1],
                    },
                    now,
                );
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        self.state.update(&Event::Tick, now);

        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.heading(self.tr.t(keys::CHART_TITLE));
            ui.label(self.tr.t(keys::GUI_INTRO));
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                self.input_row(ui, Field::Temperature, now);
                ui.add_space(24.0);
                self.input_row(ui, Field::DewPoint, now);
            });
            ui.add_space(4.0);
            self.controls(ui, now);
            if let Some(status) = &self.status {
                ui.label(egui::RichText::new(status).small());
            }
            ui.add_space(4.0);
        });

        egui::SidePanel::right("results")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                self.explanation_panel(ui, now);
                ui.add_space(8.0);
                self.result_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| self.plot(ui, now));
        self.save_pending_png(ctx);

        if let Some(deadline) = self.state.explanation().next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(now));
        }
    }
}

/// 거부된 편집이면 필드를 확정된 문자열로 되돌린다. 되돌렸으면 `true`.
fn resync_field(buf: &mut String, committed: &str) -> bool {
    if buf.trim() == committed {
        return false;
    }
    buf.clear();
    buf.push_str(committed);
    true
}

fn color_image_to_rgba(shot: &egui::ColorImage) -> Option<image::RgbaImage> {
    let [w, h] = shot.size;
    let bytes = shot
        .pixels
        .iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect();
    image::RgbaImage::from_raw(u32::try_from(w).ok()?, u32::try_from(h).ok()?, bytes)
}

fn language_name(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("Dansk")
}

fn color32(c: Color, opacity: f64) -> egui::Color32 {
    let a = (f64::from(c.a) * opacity.clamp(0.0, 1.0)).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

fn plot_name(p: &Primitive) -> String {
    if p.show_legend {
        p.name.clone()
    } else {
        String::new()
    }
}

fn draw_primitive(plot_ui: &mut egui_plot::PlotUi, p: &Primitive) {
    let points: Vec<[f64; 2]> = p
        .xs
        .iter()
        .zip(&p.ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| [*x, *y])
        .collect();
    let Some(&[x, y]) = points.first() else {
        return;
    };
    match &p.kind {
        PrimitiveKind::Line(style) => {
            let color = match style.fill_to_zero {
                Some(fill) => color32(fill, p.opacity),
                None => color32(style.color, p.opacity),
            };
            let mut line = Line::new(points)
                .color(color)
                .width(style.width)
                .name(plot_name(p))
                .style(match style.dash {
                    Dash::Solid => LineStyle::Solid,
                    Dash::Dashed => LineStyle::Dashed { length: 10.0 },
                    Dash::Dotted => LineStyle::Dotted { spacing: 6.0 },
                });
            if style.fill_to_zero.is_some() {
                line = line.fill(0.0);
            }
            plot_ui.line(line);
        }
        PrimitiveKind::Marker(style) => {
            if style.outline_width > 0.0 {
                plot_ui.points(
                    Points::new(vec![[x, y]])
                        .shape(MarkerShape::Circle)
                        .radius(style.size / 2.0 + style.outline_width)
                        .color(color32(style.outline, p.opacity)),
                );
            }
            plot_ui.points(
                Points::new(points)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(style.size / 2.0)
                    .color(color32(style.color, p.opacity))
                    .name(plot_name(p)),
            );
        }
        PrimitiveKind::Text { text, style } => {
            let mut rich = egui::RichText::new(text)
                .size(style.size)
                .color(color32(style.color, p.opacity));
            if style.bold {
                rich = rich.strong();
            }
            let anchor = match style.anchor {
                TextAnchor::TopCenter => egui::Align2::CENTER_BOTTOM,
                TextAnchor::MiddleRight => egui::Align2::LEFT_CENTER,
            };
            plot_ui.text(Text::new(PlotPoint::new(x, y), rich).anchor(anchor));
        }
    }
}

/// 포인터 위치에 해당하는 툴팁. 이름이 있는 곡선은 가장 가까운 점을, 이름 없는
/// 마커는 화면 폭의 2% 안에 있는 것을 찾는다.
fn tooltip_at(scene: &Scene, name: &str, x: f64, y: f64, fmt: &NumberFormat) -> Option<String> {
    let tolerance_x = scene.viewport.x_span() * 0.02;
    let tolerance_y = (scene.viewport.y_max() - scene.viewport.y_range[0]) * 0.02;
    let candidates = scene.primitives.iter().filter(|p| {
        !p.tooltip.is_empty()
            && if name.is_empty() {
                !p.show_legend && matches!(p.kind, PrimitiveKind::Marker(_))
            } else {
                p.show_legend && p.name == name
            }
    });
    let mut best: Option<(f64, &Primitive, usize)> = None;
    for p in candidates {
        for (i, (px, py)) in p.xs.iter().zip(&p.ys).enumerate() {
            let dx = (px - x) / tolerance_x.max(f64::EPSILON);
            let dy = (py - y) / tolerance_y.max(f64::EPSILON);
            let d = dx * dx + dy * dy;
            if (name.is_empty() && d > 2.0) || !d.is_finite() {
                continue;
            }
            if best.map_or(true, |(bd, _, _)| d < bd) {
                best = Some((d, p, i));
            }
        }
    }
    let (_, p, i) = best?;
    p.hover_text(i, fmt)
}

fn bounds_moved(view: &Viewport, min: [f64; 2], max: [f64; 2]) -> bool {
    let eps = view.x_span().abs().max(1.0) * 1e-6;
    (min[0] - view.x_min()).abs() > eps
        || (max[0] - view.x_max()).abs() > eps
        || (max[1] - view.y_max()).abs() > eps
        || (min[1] - view.y_range[0]).abs() > eps
}
