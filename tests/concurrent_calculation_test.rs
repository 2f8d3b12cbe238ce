// ==========================================
// 并发计算测试
// ==========================================
// 测试目标: 同一 OeeApi 实例在多线程下结果一致, 报表语言互不干扰
// ==========================================


use oee_calculator::api::{CalculateRequest, OeeApi};
use oee_calculator::{logging, FactorApplicationMode, Metric, OeeEngine};
use std::thread;
use test_helpers::{baseline_input, default_config};

#[test]
fn test_engine_shared_across_threads() {
    logging::init_test();
    let engine = OeeEngine::new();
    let expected = engine.calculate(&baseline_input(FactorApplicationMode::None));

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..200 {
                    let r = engine.calculate(&baseline_input(FactorApplicationMode::None));
                    assert_eq!(r, expected);
                }
            });
        }
    });
}

#[test]
fn test_reports_in_different_locales_do_not_race() {
    logging::init_test();
    let api = OeeApi::new(default_config());

    thread::scope(|s| {
        for (locale, title) in [
            ("en", "Availability (A)"),
            ("es", "Disponibilidad (A)"),
            ("zh-CN", "可用率 (A)"),
        ] {
            let api = &api;
            s.spawn(move || {
                for _ in 0..100 {
                    let req = CalculateRequest {
                        locale: Some(locale.to_string()),
                        ..CalculateRequest::default()
                    };
                    let resp = api.calculate(&req).unwrap();
                    assert_eq!(resp.card(Metric::Availability).unwrap().title, title);
                }
            });
        }
    });
}
