//! Integration tests for pixblend crates.
//!
//! End-to-end checks that drive `pixblend-ops` through `pixblend-core`
//! buffers, packed pixel data and serialized configuration.

#[cfg(test)]
mod tests {
    use pixblend_core::{Argb, Image};
    use pixblend_ops::{
        BlendMode, CompositeOptions, OpsError, blend, composite, composite_opaque, composite_with,
        parallel,
    };
    use serde::Deserialize;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    /// Every (src, dest) channel pair laid out as a 256x256 image: x drives
    /// the background, y the foreground, alpha fixed at 255.
    fn channel_grid() -> (Image, Image) {
        let mut bg = Image::new(256, 256);
        let mut fg = Image::new(256, 256);
        for y in 0..256u32 {
            for x in 0..256u32 {
                bg.set_pixel(x, y, Argb::opaque(x as u8, x as u8, x as u8));
                fg.set_pixel(x, y, Argb::opaque(y as u8, y as u8, y as u8));
            }
        }
        (bg, fg)
    }

    #[test]
    fn test_composite_covers_every_channel_pair() {
        init_tracing();
        let (bg, fg) = channel_grid();

        for mode in BlendMode::ALL {
            let out = parallel::composite(&bg, &fg, 0.8, mode).unwrap();
            for (x, y, px) in out.pixels() {
                let c = blend(mode, x as u8, y as u8, 0.8);
                assert_eq!(px, Argb::new(blend(mode, 255, 255, 0.8), c, c, c));
            }
        }
    }

    #[test]
    fn test_normal_full_opacity_returns_foreground() {
        init_tracing();
        let (bg, fg) = channel_grid();
        assert_eq!(composite_opaque(&bg, &fg, BlendMode::Normal).unwrap(), fg);
    }

    #[test]
    fn test_zero_opacity_independent_of_foreground() {
        let (bg, fg) = channel_grid();
        let gray = Image::filled(256, 256, Argb::splat(128));
        for mode in BlendMode::ALL {
            assert_eq!(
                composite(&bg, &fg, 0.0, mode).unwrap(),
                composite(&bg, &gray, 0.0, mode).unwrap(),
                "{mode}"
            );
        }
    }

    #[test]
    fn test_packed_argb_pipeline() {
        init_tracing();
        // 2x2, 0xAARRGGBB
        let bg = Image::from_argb_u32(2, 2, &[0xFF00_0000, 0xFFFF_FFFF, 0x8080_8080, 0x0010_2030])
            .unwrap();
        let fg = Image::from_argb_u32(2, 2, &[0xFFFF_FFFF, 0xFF00_0000, 0x8080_8080, 0xFF40_4040])
            .unwrap();

        let out = composite_opaque(&bg, &fg, BlendMode::Difference).unwrap();
        assert_eq!(
            out.to_argb_u32(),
            vec![0x00FF_FFFF, 0x00FF_FFFF, 0x0000_0000, 0xFF30_2010]
        );

        let out = composite_opaque(&bg, &fg, BlendMode::Multiply).unwrap();
        assert_eq!(out.pixel(0, 0), Argb::new(255, 0, 0, 0));
        assert_eq!(out.pixel(1, 0), Argb::new(255, 0, 0, 0));
    }

    #[test]
    fn test_half_opacity_screen() {
        // fg 255 attenuates to 191; screen(0, 191) = 191
        let bg = Image::filled(3, 3, Argb::splat(0));
        let fg = Image::filled(3, 3, Argb::splat(255));
        let out = composite(&bg, &fg, 0.5, BlendMode::Screen).unwrap();
        assert!(out.pixels().all(|(_, _, px)| px == Argb::splat(191)));
    }

    #[test]
    fn test_dimension_mismatch_both_paths() {
        init_tracing();
        let bg = Image::new(10, 10);
        let fg = Image::new(10, 11);
        for result in [
            composite(&bg, &fg, 1.0, BlendMode::Normal),
            parallel::composite(&bg, &fg, 1.0, BlendMode::Normal),
        ] {
            assert_eq!(
                result.unwrap_err(),
                OpsError::DimensionMismatch {
                    background: (10, 10),
                    foreground: (10, 11),
                }
            );
        }
    }

    #[derive(Deserialize)]
    struct Job {
        width: u32,
        height: u32,
        background: Argb,
        foreground: Argb,
        #[serde(default)]
        options: CompositeOptions,
    }

    #[test]
    fn test_job_from_json() {
        init_tracing();
        let job: Job = serde_json::from_str(
            r#"{
                "width": 4,
                "height": 2,
                "background": {"a": 255, "r": 200, "g": 100, "b": 0},
                "foreground": {"a": 255, "r": 100, "g": 200, "b": 255},
                "options": {"mode": "darken", "opacity": 1.0}
            }"#,
        )
        .unwrap();

        let bg = Image::filled(job.width, job.height, job.background);
        let fg = Image::filled(job.width, job.height, job.foreground);
        let out = composite_with(&bg, &fg, &job.options).unwrap();
        assert_eq!(out.pixel(3, 1), Argb::new(255, 100, 100, 0));
    }

    #[test]
    fn test_job_defaults_to_normal() {
        let job: Job = serde_json::from_str(
            r#"{"width": 1, "height": 1,
                "background": {"a": 0, "r": 0, "g": 0, "b": 0},
                "foreground": {"a": 9, "r": 8, "g": 7, "b": 6}}"#,
        )
        .unwrap();
        assert_eq!(job.options, CompositeOptions::default());

        let bg = Image::filled(job.width, job.height, job.background);
        let fg = Image::filled(job.width, job.height, job.foreground);
        let out = parallel::composite_with(&bg, &fg, &job.options).unwrap();
        assert_eq!(out.pixel(0, 0), job.foreground);
    }

    #[test]
    fn test_mode_names_parse() {
        let names = [
            "normal", "darken", "multiply", "color-burn", "linear-burn", "lighten", "screen",
            "color-dodge", "addition", "overlay", "soft-light", "hard-light", "vivid-light",
            "linear-light", "difference", "subtract", "divide",
        ];
        let parsed: Vec<BlendMode> = names
            .iter()
            .map(|n| n.parse::<BlendMode>().unwrap())
            .collect();
        assert_eq!(parsed, BlendMode::ALL.to_vec());
    }

    #[test]
    fn test_extrapolated_opacity_clamps() {
        init_tracing();
        // (mode, bg, fg, opacity, expected); attenuated fg in comments
        let cases = [
            (BlendMode::Multiply, 255, 255, 2.0, 255), // 382
            (BlendMode::Subtract, 200, 0, -1.0, 0),    // 256
            (BlendMode::Screen, 0, 0, 1.5, 0),         // -64
            (BlendMode::Multiply, 200, 50, f64::NAN, 0), // 0
            (BlendMode::Addition, 100, 0, -1.0, 255),  // 256
            (BlendMode::Normal, 0, 255, 1.5, 255),     // 318
        ];

        for (mode, s, d, opacity, expected) in cases {
            assert_eq!(blend(mode, s, d, opacity), expected, "{mode} @ {opacity}");

            let bg = Image::filled(3, 2, Argb::splat(s));
            let fg = Image::filled(3, 2, Argb::splat(d));
            let seq = composite(&bg, &fg, opacity, mode).unwrap();
            assert!(
                seq.pixels().all(|(_, _, px)| px == Argb::splat(expected)),
                "{mode} @ {opacity}"
            );
            assert_eq!(parallel::composite(&bg, &fg, opacity, mode).unwrap(), seq);
        }
    }

    #[test]
    fn test_divide_by_zero_policy() {
        // foreground 0 at full opacity
        let bg = Image::from_argb_u32(2, 1, &[0x0000_0000, 0xFF80_4001]).unwrap();
        let fg = Image::new(2, 1);
        let out = composite_opaque(&bg, &fg, BlendMode::Divide).unwrap();
        // 0/0 -> 0, x/0 -> 255
        assert_eq!(out.pixel(0, 0), Argb::TRANSPARENT);
        assert_eq!(out.pixel(1, 0), Argb::splat(255));

        let out = composite_opaque(&bg, &fg, BlendMode::VividLight).unwrap();
        assert_eq!(out.to_argb_u32(), vec![0, 0]);

        let out = composite_opaque(&bg, &fg, BlendMode::ColorBurn).unwrap();
        assert_eq!(out.to_argb_u32(), vec![0, 0]);
    }
}
