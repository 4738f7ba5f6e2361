use crate::data_structures::LinkedMinHeap;
use libc::{c_int, size_t};

#[repr(C)]
pub struct FfiHeap {
    heap: LinkedMinHeap<i64>,
}

#[no_mangle]
pub extern "C" fn lheap_new() -> *mut FfiHeap {
    Box::into_raw(Box::new(FfiHeap {
        heap: LinkedMinHeap::new(),
    }))
}

#[no_mangle]
pub extern "C" fn lheap_push(h: *mut FfiHeap, value: i64) {
    if h.is_null() {
        return;
    }
    unsafe { &mut *h }.heap.insert(value)
}

/// Writes the minimum to `out` and returns 1, or returns 0 if the heap is
/// empty (in which case `out` is left untouched)
#[no_mangle]
pub extern "C" fn lheap_extract_min(h: *mut FfiHeap, out: *mut i64) -> c_int {
    if h.is_null() || out.is_null() {
        return 0;
    }
    match unsafe { &mut *h }.heap.extract_min() {
        Ok(value) => {
            unsafe { *out = value };
            1
        }
        Err(_) => 0,
    }
}

#[no_mangle]
pub extern "C" fn lheap_len(h: *const FfiHeap) -> size_t {
    if h.is_null() {
        return 0;
    }
    unsafe { &*h }.heap.len()
}

#[no_mangle]
pub extern "C" fn lheap_free(h: *mut FfiHeap) {
    if !h.is_null() {
        unsafe {
            drop(Box::from_raw(h));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_round_trip() {
        let h = lheap_new();
        for v in [4, -2, 9] {
            lheap_push(h, v);
        }
        assert_eq!(lheap_len(h), 3);

        let mut out = 0i64;
        assert_eq!(lheap_extract_min(h, &mut out), 1);
        assert_eq!(out, -2);
        assert_eq!(lheap_extract_min(h, &mut out), 1);
        assert_eq!(lheap_extract_min(h, &mut out), 1);
        assert_eq!(out, 9);
        assert_eq!(lheap_extract_min(h, &mut out), 0);
        assert_eq!(out, 9);

        lheap_free(h);
        lheap_free(std::ptr::null_mut());
    }
}
