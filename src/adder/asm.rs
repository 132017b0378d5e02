//! Register-level realization.
//!
//! `register_adder_asm` is written directly against the platform C calling
//! convention and follows the same pre-check as [`super::classify`]:
//! compare against `MAX - second` or `MIN - second` first, add only once
//! the sum is known to fit.
//!
//! | Target  | `first` | `second` | result | scratch |
//! |---------|---------|----------|--------|---------|
//! | x86-64  | `rdi`   | `rsi`    | `rax`  | `rax`   |
//! | AArch64 | `x0`    | `x1`     | `x0`   | `x2`    |

use std::arch::global_asm;

use super::Adder;

#[cfg(target_arch = "x86_64")]
global_asm!(
    ".pushsection .text.register_adder_asm,\"ax\",@progbits",
    ".globl register_adder_asm",
    ".type register_adder_asm,@function",
    ".p2align 4",
    "register_adder_asm:",
    "    test rsi, rsi",
    "    jg .Lregister_adder_positive",
    "    jl .Lregister_adder_negative",
    "    mov rax, rdi",
    "    ret",
    ".Lregister_adder_positive:",
    "    mov rax, -1",
    "    shr rax, 1",
    "    sub rax, rsi",
    "    cmp rdi, rax",
    "    jg .Lregister_adder_reject",
    "    lea rax, [rdi + rsi]",
    "    ret",
    ".Lregister_adder_negative:",
    "    mov rax, 1",
    "    shl rax, 63",
    "    sub rax, rsi",
    "    cmp rdi, rax",
    "    jl .Lregister_adder_reject",
    "    lea rax, [rdi + rsi]",
    "    ret",
    ".Lregister_adder_reject:",
    "    xor eax, eax",
    "    ret",
    ".size register_adder_asm, . - register_adder_asm",
    ".popsection",
);

#[cfg(target_arch = "aarch64")]
global_asm!(
    ".pushsection .text.register_adder_asm,\"ax\",%progbits",
    ".globl register_adder_asm",
    ".type register_adder_asm,%function",
    ".p2align 2",
    "register_adder_asm:",
    "    cmp x1, #0",
    "    b.gt .Lregister_adder_positive",
    "    b.lt .Lregister_adder_negative",
    "    ret",
    ".Lregister_adder_positive:",
    "    mov x2, #-1",
    "    lsr x2, x2, #1",
    "    sub x2, x2, x1",
    "    cmp x0, x2",
    "    b.gt .Lregister_adder_reject",
    "    add x0, x0, x1",
    "    ret",
    ".Lregister_adder_negative:",
    "    mov x2, #1",
    "    lsl x2, x2, #63",
    "    sub x2, x2, x1",
    "    cmp x0, x2",
    "    b.lt .Lregister_adder_reject",
    "    add x0, x0, x1",
    "    ret",
    ".Lregister_adder_reject:",
    "    mov x0, xzr",
    "    ret",
    ".size register_adder_asm, . - register_adder_asm",
    ".popsection",
);

unsafe extern "C" {
    fn register_adder_asm(first: i64, second: i64) -> i64;
}

/// Hand-written assembly realization.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AsmAdder;

impl Adder for AsmAdder {
    fn add(&self, first: i64, second: i64) -> i64 {
        // SAFETY: `register_adder_asm` is defined above for this target,
        // takes two integer registers, returns one, and touches no memory.
        unsafe { register_adder_asm(first, second) }
    }

    fn name(&self) -> &'static str {
        "asm"
    }
}
