use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ls8_assembler::assemble;
use ls8_runtime::{VMConfig, VM};

/// Count R0 down from 255 to 0 with a stack round trip per iteration
const COUNTDOWN: &str = r#"
    LDI R0, 255
    LDI R1, 255      ; -1
    LDI R2, 0
    LDI R3, loop
    LDI R4, done
loop:
    CMP R0, R2
    JEQ R4
    ADD R0, R1
    PUSH R0
    POP R5
    JMP R3
done:
    HLT
"#;

fn bench_countdown(c: &mut Criterion) {
    let program = assemble(COUNTDOWN).unwrap();

    c.bench_function("countdown_255", |b| {
        b.iter(|| {
            let vm = VM::new(black_box(&program), VMConfig::default()).unwrap();
            vm.run().unwrap()
        })
    });
}

fn bench_call_ret(c: &mut Criterion) {
    let source = r#"
        LDI R0, 0
        LDI R1, 1
        LDI R2, 200
        LDI R3, loop
        LDI R4, done
        LDI R5, incr
    loop:
        CMP R0, R2
        JEQ R4
        CALL R5
        JMP R3
    incr:
        ADD R0, R1
        RET
    done:
        HLT
    "#;
    let program = assemble(source).unwrap();

    c.bench_function("call_ret_200", |b| {
        b.iter(|| {
            let vm = VM::new(black_box(&program), VMConfig::default()).unwrap();
            vm.run().unwrap()
        })
    });
}

criterion_group!(benches, bench_countdown, bench_call_ret);
criterion_main!(benches);
