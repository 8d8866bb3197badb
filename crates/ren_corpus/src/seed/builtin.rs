//! "Built-in" section: compiler-provided functions that need no import.

use super::{cat, doc, doc_warn, exd, sect};
use crate::raw::RawSection;

pub(super) fn section() -> RawSection {
    sect(
        "Built-in",
        vec![cat(
            "Built-in Functions",
            vec![
                doc(
                    "len",
                    "len(ptr: <any>) -> int",
                    "Returns the length of a pointer to an array, slice, or list. Accepts one argument.",
                    vec![
                        exd(
                            "let my_array = [10, 20, 30, 40];\nprint(len(my_array));",
                            "Get the length of a stack-allocated array. This prints 4.",
                        ),
                        exd(
                            "let my_slice = my_array[1..3]; // [20, 30]\nprint(len(my_slice));",
                            "Get the length of a slice. This prints 2.",
                        ),
                    ],
                ),
                doc_warn(
                    "sp",
                    "sp() -> *any",
                    "Returns the current stack pointer. Takes no arguments.",
                    "Probably shouldn't use this.",
                ),
                doc(
                    "copy",
                    "copy(dest: *any, src: *any, count: int) -> void",
                    "Copies `count` elements from `src` to `dest`. All three arguments are required.",
                    vec![
                        exd(
                            "let src = [1, 2, 3];\nlet dest: [int] = [0, 0, 0];",
                            "Define source and destination buffers of the same type and size.",
                        ),
                        exd(
                            "copy(&dest, &src, 3);\n// dest is now [1, 2, 3]",
                            "Copy 3 elements from `src` to `dest`. The destination must have enough capacity.",
                        ),
                    ],
                ),
                doc(
                    "sizeof",
                    "sizeof(type: type) -> int",
                    "Returns the size in bytes of the specified type. Requires one type argument.",
                    vec![
                        exd(
                            "print(sizeof(bool));",
                            "Get the size of a primitive type in bytes. This prints 1.",
                        ),
                        exd(
                            "print(sizeof([int]));",
                            "Get the size of a complex type like a list, which is a pointer and a length. On a 64-bit system, this prints 16 (8 + 8).",
                        ),
                    ],
                ),
                doc_warn(
                    "param",
                    "param(index: int) -> void",
                    "Fetches a function parameter at the specified index. Takes one argument.",
                    "Probably shouldn't use this.",
                ),
                doc_warn(
                    "istype",
                    "istype(val: any, type: type) -> bool",
                    "Checks if the given value matches the specified type. Takes one argument and one type argument.",
                    "Probably shouldn't use this.",
                ),
            ],
        )],
    )
}
