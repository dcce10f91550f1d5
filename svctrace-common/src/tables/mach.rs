// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mach trap table, keyed by trap-number magnitude.
//!
//! Unassigned slots keep their `kern_invalid` placeholder so the numbering
//! stays aligned with the kernel trap vector.

use crate::SyscallDesc;

use super::desc;

pub static MACH_TRAPS: &[(i64, SyscallDesc)] = &[
    desc!(1, "kern_invalid"),
    desc!(2, "kern_invalid"),
    desc!(3, "kern_invalid"),
    desc!(4, "kern_invalid"),
    desc!(5, "kern_invalid"),
    desc!(6, "kern_invalid"),
    desc!(7, "kern_invalid"),
    desc!(8, "kern_invalid"),
    desc!(9, "kern_invalid"),
    desc!(10, "_kernelrpc_mach_vm_allocate_trap"),
    desc!(11, "_kernelrpc_mach_vm_purgable_control_trap"),
    desc!(12, "_kernelrpc_mach_vm_deallocate_trap"),
    desc!(13, "task_dyld_process_info_notify_get_trap"),
    desc!(14, "_kernelrpc_mach_vm_protect_trap"),
    desc!(15, "_kernelrpc_mach_vm_map_trap"),
    desc!(16, "_kernelrpc_mach_port_allocate_trap"),
    desc!(17, "kern_invalid"),
    desc!(18, "_kernelrpc_mach_port_deallocate_trap"),
    desc!(19, "_kernelrpc_mach_port_mod_refs_trap"),
    desc!(20, "_kernelrpc_mach_port_move_member_trap"),
    desc!(21, "_kernelrpc_mach_port_insert_right_trap"),
    desc!(22, "_kernelrpc_mach_port_insert_member_trap"),
    desc!(23, "_kernelrpc_mach_port_extract_member_trap"),
    desc!(24, "_kernelrpc_mach_port_construct_trap"),
    desc!(25, "_kernelrpc_mach_port_destruct_trap"),
    desc!(26, "mach_reply_port"),
    desc!(27, "thread_self_trap"),
    desc!(28, "task_self_trap"),
    desc!(29, "host_self_trap"),
    desc!(30, "kern_invalid"),
    desc!(31, "mach_msg_trap"),
    desc!(32, "mach_msg_overwrite_trap"),
    desc!(33, "semaphore_signal_trap"),
    desc!(34, "semaphore_signal_all_trap"),
    desc!(35, "semaphore_signal_thread_trap"),
    desc!(36, "semaphore_wait_trap"),
    desc!(37, "semaphore_wait_signal_trap"),
    desc!(38, "semaphore_timedwait_trap"),
    desc!(39, "semaphore_timedwait_signal_trap"),
    desc!(40, "_kernelrpc_mach_port_get_attributes_trap"),
    desc!(41, "_kernelrpc_mach_port_guard_trap"),
    desc!(42, "_kernelrpc_mach_port_unguard_trap"),
    desc!(43, "mach_generate_activity_id"),
    desc!(44, "task_name_for_pid"),
    desc!(45, "task_for_pid"),
    desc!(46, "pid_for_task"),
    desc!(47, "mach_msg2_trap"),
    desc!(48, "macx_swapon"),
    desc!(49, "macx_swapoff"),
    desc!(50, "thread_get_special_reply_port"),
    desc!(51, "macx_triggers"),
    desc!(52, "macx_backing_store_suspend"),
    desc!(53, "macx_backing_store_recovery"),
    desc!(54, "kern_invalid"),
    desc!(55, "kern_invalid"),
    desc!(56, "kern_invalid"),
    desc!(57, "kern_invalid"),
    desc!(58, "pfz_exit"),
    desc!(59, "swtch_pri"),
    desc!(60, "swtch"),
    desc!(61, "thread_switch"),
    desc!(62, "clock_sleep_trap"),
    desc!(63, "kern_invalid"),
    desc!(64, "kern_invalid"),
    desc!(65, "kern_invalid"),
    desc!(66, "kern_invalid"),
    desc!(67, "kern_invalid"),
    desc!(68, "kern_invalid"),
    desc!(69, "kern_invalid"),
    desc!(70, "host_create_mach_voucher_trap"),
    desc!(71, "kern_invalid"),
    desc!(72, "mach_voucher_extract_attr_recipe_trap"),
    desc!(73, "kern_invalid"),
    desc!(74, "kern_invalid"),
    desc!(75, "kern_invalid"),
    desc!(76, "_kernelrpc_mach_port_type_trap"),
    desc!(77, "_kernelrpc_mach_port_request_notification_trap"),
    desc!(78, "kern_invalid"),
    desc!(79, "kern_invalid"),
    desc!(80, "kern_invalid"),
    desc!(81, "kern_invalid"),
    desc!(82, "kern_invalid"),
    desc!(83, "kern_invalid"),
    desc!(84, "kern_invalid"),
    desc!(85, "kern_invalid"),
    desc!(86, "kern_invalid"),
    desc!(87, "kern_invalid"),
    desc!(88, "kern_invalid"),
    desc!(89, "mach_timebase_info_trap"),
    desc!(90, "mach_wait_until_trap"),
    desc!(91, "mk_timer_create_trap"),
    desc!(92, "mk_timer_destroy_trap"),
    desc!(93, "mk_timer_arm_trap"),
    desc!(94, "mk_timer_cancel_trap"),
    desc!(95, "mk_timer_arm_leeway_trap"),
    desc!(96, "debug_control_port_for_pid"),
    desc!(97, "kern_invalid"),
    desc!(98, "kern_invalid"),
    desc!(99, "kern_invalid"),
    desc!(100, "iokit_user_client_trap"),
    desc!(101, "kern_invalid"),
    desc!(102, "kern_invalid"),
    desc!(103, "kern_invalid"),
    desc!(104, "kern_invalid"),
    desc!(105, "kern_invalid"),
    desc!(106, "kern_invalid"),
    desc!(107, "kern_invalid"),
    desc!(108, "kern_invalid"),
    desc!(109, "kern_invalid"),
    desc!(110, "kern_invalid"),
    desc!(111, "kern_invalid"),
    desc!(112, "kern_invalid"),
    desc!(113, "kern_invalid"),
    desc!(114, "kern_invalid"),
    desc!(115, "kern_invalid"),
    desc!(116, "kern_invalid"),
    desc!(117, "kern_invalid"),
    desc!(118, "kern_invalid"),
    desc!(119, "kern_invalid"),
    desc!(120, "kern_invalid"),
    desc!(121, "kern_invalid"),
    desc!(122, "kern_invalid"),
    desc!(123, "kern_invalid"),
    desc!(124, "kern_invalid"),
    desc!(125, "kern_invalid"),
    desc!(126, "kern_invalid"),
    desc!(127, "kern_invalid"),
];
