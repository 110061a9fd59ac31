use crate::entities::{Catalog, Layout, LayoutSnapshot};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

pub fn s_layout_to_svg(
    s_layout: &LayoutSnapshot,
    catalog: &Catalog,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let layout = Layout::from_snapshot(s_layout);
    layout_to_svg(&layout, catalog, options, title)
}

/// Front view of the wall with its modules standing on the floor line.
pub fn layout_to_svg(
    layout: &Layout,
    catalog: &Catalog,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let wall = &layout.wall;
    let theme = &options.theme;

    let (w, h) = (wall.width as f32, wall.height as f32);
    let margin = 0.05 * f32::max(w, h);
    let font_size = f32::min(w, h) * 0.025;
    let stroke_width = f32::min(w, h) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the wall
        let label_content = format!(
            "width: {} | remaining: {} | utilization: {:.1}% | coverage: {:.1}% | {}",
            wall.width,
            layout.remaining_width(),
            layout.utilization_pct(),
            layout.coverage() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw wall
    let wall_group = Group::new()
        .set("id", format!("wall_{}", wall.id))
        .add(svg_util::rect(
            0,
            0,
            wall.width,
            wall.height,
            &[
                ("fill", &*format!("{}", theme.wall_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "wall, id: {}, {} x {} mm",
            wall.id, wall.width, wall.height
        )));

    //draw modules
    let modules_group = {
        let mut modules_group = Group::new().set("id", "modules");
        for (_, pm, span) in layout.spans() {
            let module = catalog.module(pm.module_id);
            let fill = theme.module_fill(module.category);
            let height = pm.height.min(wall.height);
            let y = wall.height - height;

            let finish = pm
                .finish_id
                .map_or("no finish".to_string(), |f| catalog.finish(f).name.clone());

            let mut group = Group::new()
                .add(svg_util::rect(
                    span.start,
                    y,
                    span.length(),
                    height,
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke", &*format!("{}", svg_util::change_brightness(fill, 0.5))),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "module {} ({}), {span}, {}",
                    module.id, module.name, finish
                )));

            if options.draw_labels {
                group = group.add(
                    Text::new(module.name.clone())
                        .set("x", span.start as f32 + 0.5 * span.length() as f32)
                        .set("y", y as f32 + 1.5 * font_size)
                        .set("font-size", 0.8 * font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle"),
                );
            }
            modules_group = modules_group.add(group);
        }
        modules_group
    };

    let mut document = Document::new()
        .set(
            "viewBox",
            (-margin, -margin - 2.0 * font_size, w + 2.0 * margin, h + 2.0 * margin + 2.0 * font_size),
        )
        .add(wall_group)
        .add(modules_group)
        .add(label);

    if options.draw_remainder && layout.remaining_width() > 0 {
        let start = layout.occupied_width();
        document = document.add(
            svg_util::rect(
                start,
                0,
                layout.remaining_width(),
                wall.height,
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.remainder_stroke)),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "free: {} mm",
                layout.remaining_width()
            ))),
        );
    }

    document
}
