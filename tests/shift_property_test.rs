use proptest::prelude::*;
use srtshift::subtitles::{classify_line, rewrite_lines};
use srtshift::{SubtitleLine, TimeOffset};
use std::io::Cursor;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn format_ms(ms: i64) -> String {
    format!(
        "{:02}:{:02}:{:02},{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1000 % 60,
        ms % 1000
    )
}

fn rewrite(input: &str, ms: i64) -> String {
    let mut out = Vec::new();
    rewrite_lines(Cursor::new(input), &mut out, TimeOffset::from_millis(ms)).unwrap();
    String::from_utf8(out).unwrap()
}

fn is_range_shape(line: &str) -> bool {
    let b = line.as_bytes();
    b.len() == 29
        && &b[12..17] == b" --> "
        && [0usize, 17].iter().all(|&at| {
            let t = &b[at..at + 12];
            t[2] == b':' && t[5] == b':' && t[8] == b','
                && [0, 1, 3, 4, 6, 7, 9, 10, 11].iter().all(|&i| t[i].is_ascii_digit())
        })
}

proptest! {
    #[test]
    fn shift_then_unshift_is_identity(
        start in 0i64..DAY_MS,
        len in 0i64..60_000,
        ms in 0i64..DAY_MS,
    ) {
        // no wraparound in either direction
        let end = (start + len).min(DAY_MS - 1);
        let ms = ms.min(DAY_MS - 1 - end);
        let line = format!("{} --> {}\n", format_ms(start), format_ms(end));

        let shifted = rewrite(&line, ms);
        prop_assert_eq!(rewrite(&shifted, -ms), line);
    }

    #[test]
    fn shifted_lines_keep_range_shape(
        start in 0i64..DAY_MS,
        end in 0i64..DAY_MS,
        ms in -3 * DAY_MS..3 * DAY_MS,
    ) {
        let line = format!("{} --> {}\n", format_ms(start), format_ms(end));
        let shifted = rewrite(&line, ms);

        let content = shifted.strip_suffix('\n').unwrap();
        prop_assert!(is_range_shape(content), "{:?}", shifted);
        let is_range = matches!(classify_line(&shifted), SubtitleLine::TimestampRange { .. });
        prop_assert!(is_range);
    }

    #[test]
    fn text_lines_pass_through(text in "[^\r\n]*", ms in any::<i32>()) {
        prop_assume!(!is_range_shape(&text));
        let input = format!("{}\n{}\r\n", text, text);
        prop_assert_eq!(rewrite(&input, ms as i64), input);
    }

    #[test]
    fn zero_offset_is_identity(
        starts in proptest::collection::vec(0i64..DAY_MS, 1..8),
        text in "[a-zA-Z ,.!?]{0,40}",
    ) {
        let mut input = String::new();
        for (i, start) in starts.iter().enumerate() {
            input.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                i + 1,
                format_ms(*start),
                format_ms((*start + 1500) % DAY_MS),
                text
            ));
        }
        prop_assert_eq!(rewrite(&input, 0), input);
    }
}
