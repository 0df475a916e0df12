use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use joyslot_gamepad::{raw, AnalogCode, AxisTuning, ButtonCode, EventTranslator, InputSink};

#[derive(Default)]
struct CountingSink {
    posted: u64,
}

impl InputSink for CountingSink {
    fn post_button_pressed(&mut self, _code: ButtonCode) {
        self.posted += 1;
    }

    fn post_button_released(&mut self, _code: ButtonCode) {
        self.posted += 1;
    }

    fn post_analog_changed(&mut self, _code: AnalogCode, _value: i32, _delta: i32) {
        self.posted += 1;
    }

    fn set_joystick_active(&mut self, _active: bool) {}
}

const TUNING: AxisTuning = AxisTuning {
    button_threshold: 0.3,
    deadzone: 0.2,
};

fn bench_stick_samples(c: &mut Criterion) {
    let mut translator = EventTranslator::new();
    let mut sink = CountingSink::default();
    let samples: Vec<i16> = (0..256).map(|i| ((i * 257) % 65536 - 32768) as i16).collect();

    c.bench_function("translate_stick_sweep", |b| {
        b.iter(|| {
            for &v in samples.iter() {
                translator.axis(&mut sink, raw::AXIS_LEFT_X, black_box(v), TUNING);
            }
            black_box(sink.posted);
        })
    });
}

fn bench_trigger_samples(c: &mut Criterion) {
    let mut translator = EventTranslator::new();
    let mut sink = CountingSink::default();
    let samples: [i16; 6] = [0, 5000, 20000, 20000, 5000, 0];

    c.bench_function("translate_trigger_press_release", |b| {
        b.iter(|| {
            for &v in samples.iter() {
                translator.axis(&mut sink, raw::AXIS_TRIGGER_LEFT, black_box(v), TUNING);
            }
            black_box(sink.posted);
        })
    });
}

criterion_group!(benches, bench_stick_samples, bench_trigger_samples);
criterion_main!(benches);
