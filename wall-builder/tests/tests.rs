#[cfg(test)]
mod tests {
    use std::path::Path;

    use itertools::Itertools;
    use test_case::test_case;
    use wallfit::entities::Layout;
    use wallfit::fitting::rank_candidates;
    use wallfit::io::export::export_layout;
    use wallfit::io::import::Importer;
    use wallfit::io::svg::layout_to_svg;
    use wallfit::util::{FPA, assertions};

    use wall_builder::config::BuilderConfig;
    use wall_builder::io;
    use wall_builder::opt::{FillStrategy, WallFiller};
    use wall_builder::session::{
        BuilderStep, ContactDetails, DragSource, DropOutcome, SmartWallBuilder,
    };

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn import(instance_path: &str, config: &BuilderConfig) -> (wallfit::entities::Catalog, Layout) {
        let ext_catalog = io::read_catalog(Path::new(instance_path)).unwrap();
        let importer = Importer::new(config.limits);
        let catalog = importer.import_catalog(&ext_catalog).unwrap();
        let layout = importer
            .import_layout(&catalog, &ext_catalog.placements)
            .unwrap();
        (catalog, layout)
    }

    #[test_case("../assets/bedroom.json"; "bedroom")]
    #[test_case("../assets/bathroom.json"; "bathroom")]
    #[test_case("../assets/office.json"; "office")]
    #[test_case("../assets/restaurant.json"; "restaurant")]
    #[test_case("../assets/events.json"; "events")]
    fn test_fill(instance_path: &str) {
        init_logger();
        let mut filled_widths = vec![];
        for strategy in [FillStrategy::Greedy, FillStrategy::Exact] {
            let config = BuilderConfig {
                fill_strategy: strategy,
                ..BuilderConfig::default()
            };
            let (catalog, layout) = import(instance_path, &config);
            let initial_width = layout.occupied_width();

            let mut filler = WallFiller::new(catalog, layout, config);
            let solution = filler.solve().unwrap();

            let layout = &filler.layout;
            assert!(assertions::layout_is_consistent(layout));
            assert_eq!(solution.occupied_width(), layout.occupied_width());
            assert_eq!(FPA(solution.utilization()), FPA(layout.utilization()));
            assert!(layout.utilization() <= 1.0);

            // nothing in the palette fits in what is left
            let suggestions = rank_candidates(layout, &filler.catalog.modules, &filler.config.fit_config);
            assert!(suggestions.iter().all(|s| !s.check.fits()));

            let ext_layout = export_layout(layout);
            let offsets_ok = ext_layout
                .placed_modules
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.offset + a.width == b.offset);
            assert!(offsets_ok);
            assert_eq!(FPA(ext_layout.utilization), FPA(layout.utilization()));

            let svg = layout_to_svg(layout, &filler.catalog, filler.config.svg_draw_options, "test");
            assert!(svg.to_string().contains("utilization"));

            filled_widths.push(layout.occupied_width() - initial_width);
        }
        assert!(filled_widths[1] >= filled_widths[0], "exact fill worse than greedy");
    }

    #[test_case("../assets/bedroom.json"; "bedroom")]
    #[test_case("../assets/office.json"; "office")]
    #[test_case("../assets/restaurant.json"; "restaurant")]
    fn test_builder_session(instance_path: &str) {
        init_logger();
        let config = BuilderConfig::default();
        let (catalog, layout) = import(instance_path, &config);
        let initial_keys = layout.keys().to_vec();
        let mut builder = SmartWallBuilder::with_layout(catalog, layout, config);

        // drag every module of the palette to the left edge until nothing fits anymore
        let mut n_placed = 0;
        for module_id in (0..builder.catalog.modules.len()).cycle().take(40) {
            builder.start_drag(DragSource::Palette(module_id)).unwrap();
            let preview = builder.hover(0).unwrap();
            let outcome = builder.drop_at(0).unwrap();
            assert_eq!(preview.accepts(), matches!(outcome, DropOutcome::Placed(_)));
            if preview.accepts() {
                n_placed += 1;
            }
            assert!(assertions::layout_is_consistent(builder.layout()));
        }
        assert!(n_placed > 0);

        // reverse the order of the wall by dragging
        let keys = builder.layout().keys().to_vec();
        for (i, &pk) in keys.iter().enumerate() {
            builder.start_drag(DragSource::Placed(pk)).unwrap();
            assert!(builder.hover(0).unwrap().accepts());
            assert_eq!(builder.drop_at(0).unwrap(), DropOutcome::Moved(pk));
            assert_eq!(builder.layout().position(pk).unwrap(), 0, "move {i}");
        }
        assert_eq!(
            builder.layout().keys().iter().rev().collect_vec(),
            keys.iter().collect_vec()
        );

        // undo everything
        while builder.undo() {}
        assert_eq!(builder.layout().keys(), initial_keys.as_slice());

        // and back to a submittable state
        builder.auto_fill().unwrap();
        builder.next_step().unwrap();
        builder.apply_finish_to_all(0).unwrap();
        builder.next_step().unwrap();
        builder.contact = ContactDetails {
            name: "Alex".into(),
            email: "alex@example.com".into(),
            phone: Some("+1 555 010 0200".into()),
            message: Some("Installation in spring".into()),
        };
        assert_eq!(builder.next_step().unwrap(), BuilderStep::Review);

        let quote = builder.submit_quote().unwrap();
        assert_eq!(quote.estimate.lines.len(), builder.layout().len());
        assert!(quote.estimate.total > quote.estimate.subtotal);
        assert!(serde_json::to_string(&quote).is_ok());
    }

    #[test]
    fn test_overflowing_placements_are_rejected() {
        let config = BuilderConfig::default();
        let mut ext_catalog = io::read_catalog(Path::new("../assets/bathroom.json")).unwrap();
        let importer = Importer::new(config.limits);
        let catalog = importer.import_catalog(&ext_catalog).unwrap();

        ext_catalog.placements = serde_json::from_str(
            r#"[{"module_id": 1}, {"module_id": 1}]"#,
        )
        .unwrap();
        assert!(importer.import_layout(&catalog, &ext_catalog.placements).is_err());
    }
}
