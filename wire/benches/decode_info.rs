use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wire::{decode_info, encode_info_to_vec, ExtraDataFlags, ServerInfo, SourceTv};

fn full_response() -> Vec<u8> {
    let info = ServerInfo {
        protocol_version: 17,
        name: "Benchmark Server | 128 tick | Community".into(),
        map: "cp_badlands".into(),
        folder: "tf".into(),
        game: "Team Fortress".into(),
        app_id: 440,
        players: 23,
        max_players: 24,
        bots: 1,
        server_type: b'd',
        platform: b'l',
        password: false,
        vac: true,
        version: "8835751".into(),
        port: 27015,
        steam_id: 0x0110_0001_0000_0042,
        source_tv: SourceTv {
            port: 27020,
            name: "SourceTV".into(),
        },
        keywords: "cp,increased_maxplayers,nocrits,norespawntime".into(),
        game_id: 440,
        ..ServerInfo::default()
    };
    encode_info_to_vec(&info, Some(ExtraDataFlags::from_raw(0xF1))).expect("encode fixture")
}

fn bench_decode_info(c: &mut Criterion) {
    let bytes = full_response();
    let mut group = c.benchmark_group("decode_info");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("all_extra_data", |b| {
        b.iter(|| decode_info(black_box(&bytes)).expect("decode"));
    });
    group.finish();
}

criterion_group!(benches, bench_decode_info);
criterion_main!(benches);
