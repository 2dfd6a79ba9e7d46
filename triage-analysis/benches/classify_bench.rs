//! Classification throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use triage_analysis::classify::RiskLexicon;
use triage_analysis::report::RiskClassifier;
use triage_core::PredictionPayload;

fn bench_risk_from_combined(c: &mut Criterion) {
    let lexicon = RiskLexicon::new();
    let sentences = [
        "High risk: Both modalities indicate PCOS symptoms.",
        "Moderate risk: One modality suggests PCOS symptoms.",
        "Low risk: No PCOS detected by either modality.",
        "the scan completed without conclusive output from either model",
    ];

    c.bench_function("risk_from_combined", |b| {
        b.iter(|| {
            for sentence in sentences {
                black_box(lexicon.risk_from_combined(Some(black_box(sentence))));
            }
        })
    });
}

fn bench_classify_full_payload(c: &mut Criterion) {
    let classifier = RiskClassifier::new();
    let payload = PredictionPayload::from_json(
        r#"{
            "ok": true,
            "face_pred": "unhealthy",
            "face_scores": [0.12, 0.88],
            "xray_pred": "PCOS symptoms detected in X-ray",
            "found_labels": ["cyst"],
            "face_risk": "high",
            "xray_risk": "high",
            "overall_risk": "high",
            "combined": "High risk: Both modalities indicate PCOS symptoms."
        }"#,
    )
    .unwrap();

    c.bench_function("classify_full_payload", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&payload))))
    });
}

criterion_group!(benches, bench_risk_from_combined, bench_classify_full_payload);
criterion_main!(benches);
