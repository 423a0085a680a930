pub mod buffer;
pub mod general;

#[cfg(test)]
mod buffer_tests {
    use crate::buffer::RingBuffer;
    use approx::assert_ulps_eq;

    #[test]
    fn test_ringbuffer_empty() {
        let x: RingBuffer<u32> = RingBuffer::new(5);
        assert!(x.get_avg().is_none());
        assert!(x.latest().is_none());
    }
    #[test]
    fn test_ringbuffer_partially_filled() {
        let mut x: RingBuffer<i32> = RingBuffer::new(5);
        x.push(3);
        x.push(4);
        assert_eq!(x.latest(), Some(4));
        assert_ulps_eq!(x.get_avg().unwrap(), 3.5);
    }
    #[test]
    fn test_ringbuffer_overwrites_oldest() {
        let mut x: RingBuffer<i32> = RingBuffer::new(5);
        for val in [3, 4, 2, 1, 5, 10].iter() {
            x.push(*val);
        }
        assert_eq!(x.latest(), Some(10));
        assert_ulps_eq!(x.get_avg().unwrap(), 4.4);
    }
    #[test]
    fn test_ringbuffer_zero_capacity() {
        let mut x: RingBuffer<u32> = RingBuffer::new(0);
        x.push(7);
        x.push(9);
        assert_eq!(x.latest(), Some(9));
        assert_ulps_eq!(x.get_avg().unwrap(), 9.0);
    }
}
