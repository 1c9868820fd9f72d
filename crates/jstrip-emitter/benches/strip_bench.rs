//! Strip Benchmark
//!
//! Measures comment stripping throughput (bytes/sec) on comment-heavy and
//! comment-free Java sources.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jstrip_emitter::{EmitOptions, strip_comments, strip_comments_with};

// =============================================================================
// Test Sources
// =============================================================================

const DOCUMENTED_CLASS: &str = r#"
/**
 * A small service with JavaDoc on every member.
 */
public class UserService {
    /** Backing store. */
    private final Map<Integer, User> users = new HashMap<>(); // keyed by id

    /*
     * Adds a user. Overwrites any existing entry with the same id.
     */
    public void addUser(User user) {
        users.put(user.id(), user); // last write wins
    }

    public String describe(int id) {
        return "user://" + id + " /* not a comment */";
    }

    public String template() {
        return """
            <p>// kept</p>
            """;
    }
}
"#;

const COMMENT_FREE: &str = r#"
public class Point {
    private final int x;
    private final int y;

    public Point(int x, int y) {
        this.x = x;
        this.y = y;
    }

    public int manhattan() {
        return Math.abs(x) + Math.abs(y);
    }
}
"#;

fn repeat(source: &str, times: usize) -> String {
    source.repeat(times)
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_comments");

    for (name, source) in [("documented", DOCUMENTED_CLASS), ("comment_free", COMMENT_FREE)] {
        for times in [1, 64] {
            let input = repeat(source, times);
            group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(name, input.len()),
                &input,
                |b, input| b.iter(|| strip_comments(black_box(input))),
            );
        }
    }

    group.finish();
}

fn bench_preserve_line_breaks(c: &mut Criterion) {
    let input = repeat(DOCUMENTED_CLASS, 64);
    let options = EmitOptions {
        preserve_line_breaks: true,
    };
    c.bench_function("strip_comments_preserve_line_breaks", |b| {
        b.iter(|| strip_comments_with(black_box(&input), &options))
    });
}

criterion_group!(benches, bench_strip, bench_preserve_line_breaks);
criterion_main!(benches);
